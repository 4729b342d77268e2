use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::cart::Cart;
use crate::checkout::{FieldValue, OrderConfirmation, Step};
use crate::storefront::{ShopperAction, View};

/// Errors that can occur when reading a session script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to open script: {0}")]
    Open(csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized action '{action}'")]
    UnrecognizedAction { line: usize, action: String },

    #[error("line {line}: {action} missing {column}")]
    MissingColumn {
        line: usize,
        action: String,
        column: &'static str,
    },

    #[error("line {line}: invalid {column} '{value}'")]
    InvalidValue {
        line: usize,
        column: &'static str,
        value: String,
    },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    action: String,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, Serialize)]
struct CartRow<'a> {
    id: &'a str,
    name: &'a str,
    description: String,
    quantity: u32,
    unit_price: String,
    subtotal: String,
}

#[derive(Debug, Serialize)]
struct OrderRow<'a> {
    order_number: &'a str,
    email: &'a str,
}

/// Read shopper actions from a csv session script.
/// The returned iterator owns the open file and does not borrow `path`.
pub fn read_actions(
    path: &Path,
) -> Result<impl Iterator<Item = Result<ShopperAction, ScriptError>> + use<>, ScriptError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(ScriptError::Open)?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| ScriptError::Parse { line, source })?;
            parse_row(line, row)
        }))
}

fn parse_row(line: usize, row: InputRow) -> Result<ShopperAction, ScriptError> {
    let action = row.action.as_str();
    let require = |column: &'static str, value: Option<String>| {
        value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ScriptError::MissingColumn {
                line,
                action: action.to_string(),
                column,
            })
    };
    let invalid = |column: &'static str, value: String| ScriptError::InvalidValue {
        line,
        column,
        value,
    };

    let parsed = match action {
        "add" => ShopperAction::AddCatalogCake {
            cake_id: require("target", row.target)?,
        },
        "select" => {
            let layer = require("target", row.target)?;
            ShopperAction::SelectOption {
                layer: layer.parse().map_err(|v| invalid("target", v))?,
                option_id: require("value", row.value)?,
            }
        }
        "add_custom" => ShopperAction::AddCustomCake,
        "quantity" => {
            let id = require("target", row.target)?;
            let quantity = require("value", row.value)?;
            ShopperAction::UpdateQuantity {
                id,
                quantity: quantity
                    .parse()
                    .map_err(|_| invalid("value", quantity.clone()))?,
            }
        }
        "remove" => ShopperAction::RemoveItem {
            id: require("target", row.target)?,
        },
        "clear" => ShopperAction::ClearCart,
        "view" => {
            let view = require("target", row.target)?;
            ShopperAction::Navigate(view.parse::<View>().map_err(|v| invalid("target", v))?)
        }
        "checkout" => ShopperAction::StartCheckout,
        "field" => {
            let step = require("target", row.target)?;
            let step = step.parse::<Step>().map_err(|v| invalid("target", v))?;
            let field = require("field", row.field)?;
            // empty value clears a text field
            let value = row.value.unwrap_or_default();
            let value = match value.as_str() {
                "true" => FieldValue::Flag(true),
                "false" => FieldValue::Flag(false),
                _ => FieldValue::Text(value),
            };
            ShopperAction::SetField { step, field, value }
        }
        "continue" => ShopperAction::Continue,
        "back" => ShopperAction::Back,
        "login" => ShopperAction::Login {
            email: require("value", row.value)?,
        },
        "logout" => ShopperAction::Logout,
        other => {
            return Err(ScriptError::UnrecognizedAction {
                line,
                action: other.to_string(),
            });
        }
    };
    Ok(parsed)
}

/// Write cart lines in csv format, followed by a `total` row
pub fn write_cart(writer: impl io::Write, cart: &Cart) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record([
        "id",
        "name",
        "description",
        "quantity",
        "unit_price",
        "subtotal",
    ])?;

    for item in cart.items() {
        writer.serialize(CartRow {
            id: item.id(),
            name: item.line().display_name(),
            description: item.line().description().unwrap_or_default(),
            quantity: item.quantity(),
            unit_price: item.unit_price().to_string(),
            subtotal: item.subtotal().to_string(),
        })?;
    }

    writer.write_record([
        "total".to_string(),
        String::new(),
        String::new(),
        cart.item_count().to_string(),
        String::new(),
        cart.total().to_string(),
    ])?;

    writer.flush()?;
    Ok(())
}

/// Write placed orders in csv format
pub fn write_orders<'a>(
    writer: impl io::Write,
    confirmations: impl IntoIterator<Item = &'a OrderConfirmation>,
) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(["order_number", "email"])?;

    for confirmation in confirmations {
        writer.serialize(OrderRow {
            order_number: confirmation.order_number.as_str(),
            email: &confirmation.email,
        })?;
    }

    writer.flush()?;
    Ok(())
}
