//! Pricing and receipt formatting for spare-part bookings.
//!
//! Totals apply two fixed-rate surcharges (9% GST, 4% CGST) to the base
//! price. The receipt is rendered as the HTML document handed to the
//! external print/preview renderer.

use serde::{Deserialize, Serialize};

use crate::error::SpareResult;
use crate::models::Booking;
use crate::validation::validate_price;

/// GST surcharge rate applied to the base price
pub const GST_RATE: f64 = 0.09;

/// CGST surcharge rate applied to the base price
pub const CGST_RATE: f64 = 0.04;

/// Warranty period printed on every receipt
pub const WARRANTY_NOTICE: &str = "1 Year";

fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Total price for a base amount: base + 9% GST + 4% CGST, rounded to two
/// decimal places. Pure.
pub fn compute_total(base: f64) -> f64 {
    round2(base + base * GST_RATE + base * CGST_RATE)
}

/// Format an amount with two decimal places, as shown on the receipt.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// The three price lines plus total for one booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base: f64,
    pub gst: f64,
    pub cgst: f64,
    pub total: f64,
}

impl PriceBreakdown {
    /// Compute the breakdown for a base price. The surcharge lines are
    /// rounded individually for display; the total is computed from the
    /// unrounded surcharges, matching how the receipt has always been
    /// printed.
    pub fn compute(base: f64) -> Self {
        Self {
            base,
            gst: round2(base * GST_RATE),
            cgst: round2(base * CGST_RATE),
            total: compute_total(base),
        }
    }
}

/// A structured receipt for one booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub customer_name: String,
    pub address: String,
    pub mobile: String,
    pub spare_name: String,
    pub car_name: String,
    pub car_make: String,
    pub prices: PriceBreakdown,
    pub warranty: String,
}

impl Receipt {
    /// Build a receipt from a booking, parsing its price string.
    pub fn from_booking(booking: &Booking) -> SpareResult<Self> {
        let base = validate_price(&booking.price)?;
        Ok(Self {
            customer_name: booking.customer_name.clone(),
            address: booking.address.clone(),
            mobile: booking.mobile.clone(),
            spare_name: booking.spare_name.clone(),
            car_name: booking.car_name.clone(),
            car_make: booking.car_make.clone(),
            prices: PriceBreakdown::compute(base),
            warranty: WARRANTY_NOTICE.to_string(),
        })
    }

    /// Render the receipt as the HTML document passed to the external
    /// print/preview renderer.
    pub fn to_html(&self) -> String {
        let row = |label: &str, value: &str| {
            format!(
                "          <tr>\n            <td><strong>{}:</strong></td><td>{}</td>\n          </tr>\n",
                label, value
            )
        };

        let mut rows = String::new();
        rows.push_str(&row("Customer Name", &self.customer_name));
        rows.push_str(&row("Address", &self.address));
        rows.push_str(&row("Mobile", &self.mobile));
        rows.push_str(&row("Spare Name", &self.spare_name));
        rows.push_str(&row("Car Name", &self.car_name));
        rows.push_str(&row("Car Make", &self.car_make));
        rows.push_str(&row("Price", &format!("₹{}", format_amount(self.prices.base))));
        rows.push_str(&row("GST (9%)", &format!("₹{}", format_amount(self.prices.gst))));
        rows.push_str(&row("CGST (4%)", &format!("₹{}", format_amount(self.prices.cgst))));
        rows.push_str(&row("Total", &format!("₹{}", format_amount(self.prices.total))));
        rows.push_str(&row("Warranty", &self.warranty));

        format!(
            "<html>\n  <body style=\"font-family: Arial, sans-serif; background-color: #f8f9fa; color: #333; padding: 20px;\">\n    <h1 style=\"text-align: center; color: #4CAF50;\">Spare Gold</h1>\n    <h2 style=\"text-align: center; color: #666;\">Receipt</h2>\n    <table style=\"width: 100%; border: 1px solid #ddd; border-collapse: collapse; margin-top: 20px;\">\n{}    </table>\n    <p style=\"margin-top: 20px; text-align: center; color: #999;\">Thank you for booking with us! We hope to serve you again.</p>\n    <footer style=\"text-align: center; margin-top: 20px; color: #ccc;\">\n      <p>Terms and Conditions: All parts come with a 1-year warranty. GST and CGST are applicable as per the government rules.</p>\n    </footer>\n  </body>\n</html>\n",
            rows
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(price: &str) -> Booking {
        Booking::new(
            "Asha",
            "12 MG Road",
            "9876543210",
            "Brake Pad",
            "Model S",
            "Tesla",
            price,
        )
    }

    #[test]
    fn test_compute_total_hundred() {
        assert_eq!(compute_total(100.0), 113.0);
    }

    #[test]
    fn test_compute_total_zero() {
        assert_eq!(compute_total(0.0), 0.0);
    }

    #[test]
    fn test_compute_total_rounds_to_two_places() {
        // 99.99 + 8.9991 + 3.9996 = 112.9887
        assert_eq!(compute_total(99.99), 112.99);
    }

    #[test]
    fn test_breakdown_lines() {
        let prices = PriceBreakdown::compute(100.0);
        assert_eq!(prices.gst, 9.0);
        assert_eq!(prices.cgst, 4.0);
        assert_eq!(prices.total, 113.0);
    }

    #[test]
    fn test_breakdown_is_pure() {
        assert_eq!(PriceBreakdown::compute(250.5), PriceBreakdown::compute(250.5));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(113.0), "113.00");
        assert_eq!(format_amount(8.999), "9.00");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_receipt_from_booking() {
        let receipt = Receipt::from_booking(&booking("100.00")).unwrap();
        assert_eq!(receipt.customer_name, "Asha");
        assert_eq!(receipt.prices.total, 113.0);
        assert_eq!(receipt.warranty, "1 Year");
    }

    #[test]
    fn test_receipt_rejects_bad_price() {
        assert!(Receipt::from_booking(&booking("not-a-price")).is_err());
    }

    #[test]
    fn test_receipt_html_contains_price_lines() {
        let html = Receipt::from_booking(&booking("100.00")).unwrap().to_html();

        assert!(html.contains("Spare Gold"));
        assert!(html.contains("<strong>Price:</strong></td><td>₹100.00"));
        assert!(html.contains("<strong>GST (9%):</strong></td><td>₹9.00"));
        assert!(html.contains("<strong>CGST (4%):</strong></td><td>₹4.00"));
        assert!(html.contains("<strong>Total:</strong></td><td>₹113.00"));
        assert!(html.contains("<strong>Warranty:</strong></td><td>1 Year"));
        assert!(html.contains("Thank you for booking with us!"));
    }
}
