//! HTML rendering of the catalog, order and receipt views.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tera::{Context, Tera, Value};
use thiserror::Error;

use crate::dto::catalog::CatalogPageData;
use crate::dto::order::{OrderPageData, OrderReceipt};
use crate::forms::order::OrderForm;
use crate::models::config::AppConfig;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Formats an amount as `$1,850.00`.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{grouped}.{cents}")
}

fn value_to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(text) => text.parse().ok(),
        Value::Number(number) => number.to_string().parse().ok(),
        _ => None,
    }
}

pub struct Renderer {
    tera: Tera,
    site_name: String,
}

impl Renderer {
    /// Loads templates from the configured glob.
    pub fn new(config: &AppConfig) -> Result<Self, RenderError> {
        let tera = Tera::new(&config.templates_dir)?;
        Ok(Self::from_tera(
            tera,
            &config.site_name,
            &config.currency_symbol,
        ))
    }

    /// Wraps an already loaded template set and registers the `money` filter.
    pub fn from_tera(mut tera: Tera, site_name: &str, currency_symbol: &str) -> Self {
        let symbol = currency_symbol.to_string();
        tera.register_filter(
            "money",
            move |value: &Value, _args: &HashMap<String, Value>| -> tera::Result<Value> {
                let amount = value_to_decimal(value)
                    .ok_or_else(|| tera::Error::msg(format!("money: not an amount: {value}")))?;
                Ok(Value::String(format_money(amount, &symbol)))
            },
        );
        Self {
            tera,
            site_name: site_name.to_string(),
        }
    }

    fn render(&self, template: &str, key: &str, data: &impl Serialize) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("site_name", &self.site_name);
        context.insert(key, data);
        Ok(self.tera.render(template, &context)?)
    }

    pub fn catalog(&self, page: &CatalogPageData) -> Result<String, RenderError> {
        self.render("catalog.html", "page", page)
    }

    /// Renders the order page, echoing back what the visitor already typed.
    pub fn order(&self, page: &OrderPageData, form: &OrderForm) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("site_name", &self.site_name);
        context.insert("page", page);
        context.insert("form", form);
        Ok(self.tera.render("order.html", &context)?)
    }

    pub fn receipt(&self, receipt: &OrderReceipt) -> Result<String, RenderError> {
        self.render("receipt.html", "receipt", receipt)
    }
}
