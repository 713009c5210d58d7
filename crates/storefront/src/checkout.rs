//! Order summary: coupons, discount, shipping and total.
//!
//! Any accepted coupon takes a flat 10% off the subtotal, and free
//! shipping is decided against an absolute threshold regardless of the
//! display currency. Both are demo rules carried over unchanged.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use vedic_hearth_core::{CurrencyCode, Price};

use crate::state::CartLine;
use crate::view::CartSummary;

/// Subtotal at or above which shipping is free.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Flat shipping fee below the threshold.
pub const DEFAULT_SHIPPING_FEE: Decimal = Decimal::from_parts(299, 0, 0, false, 0);

/// Discount applied for any accepted coupon (10%).
const COUPON_DISCOUNT_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Errors from coupon entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Enter a coupon code")]
    EmptyCoupon,
    #[error("Invalid coupon code. Try WELCOME10, SACRED15, or VEDIC20")]
    InvalidCoupon(String),
}

/// An accepted coupon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coupon {
    Welcome10,
    Sacred15,
    Vedic20,
}

impl Coupon {
    pub const ALL: [Self; 3] = [Self::Welcome10, Self::Sacred15, Self::Vedic20];

    /// The code as printed on promotions.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Welcome10 => "WELCOME10",
            Self::Sacred15 => "SACRED15",
            Self::Vedic20 => "VEDIC20",
        }
    }

    /// Percentage advertised by the code name.
    ///
    /// Not what is applied; see [`Coupon::discount_on`].
    #[must_use]
    pub const fn advertised_percent(self) -> u8 {
        match self {
            Self::Welcome10 => 10,
            Self::Sacred15 => 15,
            Self::Vedic20 => 20,
        }
    }

    /// Discount on a subtotal: 10% rounded half away from zero to a whole
    /// unit, whichever coupon was used.
    #[must_use]
    pub fn discount_on(self, subtotal: Decimal) -> Decimal {
        subtotal
            .saturating_mul(COUPON_DISCOUNT_RATE)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl FromStr for Coupon {
    type Err = CheckoutError;

    /// Parse user input; matching ignores case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        if code.is_empty() {
            return Err(CheckoutError::EmptyCoupon);
        }
        Self::ALL
            .into_iter()
            .find(|coupon| coupon.code() == code)
            .ok_or(CheckoutError::InvalidCoupon(code))
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Shipping rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    pub free_shipping_threshold: Decimal,
    pub shipping_fee: Decimal,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            shipping_fee: DEFAULT_SHIPPING_FEE,
        }
    }
}

impl ShippingPolicy {
    /// Shipping charged on a subtotal. Empty carts ship nothing.
    #[must_use]
    pub fn shipping_for(&self, subtotal: Decimal, item_count: u64) -> Decimal {
        if item_count == 0 || subtotal >= self.free_shipping_threshold {
            Decimal::ZERO
        } else {
            self.shipping_fee
        }
    }
}

/// Cart page order summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub item_count: u64,
    pub subtotal: Decimal,
    pub coupon: Option<Coupon>,
    pub discount: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    /// How much more to spend for free shipping, when shipping is charged.
    pub remaining_for_free_shipping: Option<Decimal>,
    pub currency: CurrencyCode,
}

impl OrderSummary {
    /// Compute the summary for a cart.
    #[must_use]
    pub fn compute(
        lines: &[CartLine],
        coupon: Option<Coupon>,
        currency: CurrencyCode,
        policy: &ShippingPolicy,
    ) -> Self {
        let cart = CartSummary::from_lines(lines, currency);
        let discount = coupon.map_or(Decimal::ZERO, |c| c.discount_on(cart.subtotal));
        let shipping = policy.shipping_for(cart.subtotal, cart.item_count);
        let remaining_for_free_shipping = (shipping > Decimal::ZERO)
            .then(|| policy.free_shipping_threshold.saturating_sub(cart.subtotal));

        Self {
            item_count: cart.item_count,
            subtotal: cart.subtotal,
            coupon,
            discount,
            shipping,
            total: cart
                .subtotal
                .saturating_sub(discount)
                .saturating_add(shipping),
            remaining_for_free_shipping,
            currency,
        }
    }

    /// Returns true if shipping is free for a non-empty cart.
    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.item_count > 0 && self.shipping.is_zero()
    }

    /// Format an amount in the summary's currency.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        Price::new(amount, self.currency).display()
    }
}
