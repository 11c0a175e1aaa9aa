use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Order status enum representing the lifecycle of an order
///
/// This service only ever writes two of these states: `on-hold` when a
/// Cash-on-Delivery order is first viewed on the confirmation page, and
/// `processing` after a successful amendment. All other transitions belong
/// to the shop platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text")]
pub enum OrderStatus {
    #[sqlx(rename = "pending")]
    #[serde(rename = "pending")]
    Pending,
    #[sqlx(rename = "on-hold")]
    #[serde(rename = "on-hold")]
    OnHold,
    #[sqlx(rename = "processing")]
    #[serde(rename = "processing")]
    Processing,
    #[sqlx(rename = "completed")]
    #[serde(rename = "completed")]
    Completed,
    #[sqlx(rename = "cancelled")]
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    /// Convert status to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::OnHold => "on-hold",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "on-hold" => Ok(OrderStatus::OnHold),
            "processing" => Ok(OrderStatus::Processing),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment method chosen at checkout
///
/// Only `cod` orders are eligible for post-purchase amendment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text")]
pub enum PaymentMethod {
    #[sqlx(rename = "cod")]
    #[serde(rename = "cod")]
    CashOnDelivery,
    #[sqlx(rename = "card")]
    #[serde(rename = "card")]
    Card,
    #[sqlx(rename = "paypal")]
    #[serde(rename = "paypal")]
    Paypal,
    #[sqlx(rename = "bank_transfer")]
    #[serde(rename = "bank_transfer")]
    BankTransfer,
}

impl PaymentMethod {
    /// Convert payment method to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "cod",
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    /// Parse payment method from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "cod" => Ok(PaymentMethod::CashOnDelivery),
            "card" => Ok(PaymentMethod::Card),
            "paypal" => Ok(PaymentMethod::Paypal),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing an order
///
/// The `total` column is derived: it must equal the sum of line-item
/// subtotals after any mutation, which is why every write path asks the
/// gateway to recompute it rather than computing it locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub total: Decimal,
    pub items: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One (product, quantity, unit price) entry within an order
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LineItem {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Read-only view of a catalog product
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}
