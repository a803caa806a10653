#![allow(dead_code)]

use std::cell::RefCell;
use std::time::Duration;

use puppy_shop::catalog::Catalog;
use puppy_shop::domain::order::OrderSubmission;
use puppy_shop::gateway::OrderGateway;
use puppy_shop::gateway::errors::{GatewayError, GatewayResult};
use puppy_shop::render::Renderer;
use puppy_shop::storefront::{SessionOptions, Storefront};
use tera::Tera;

pub const DEBOUNCE: Duration = Duration::from_millis(300);

pub fn renderer() -> Renderer {
    let tera = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
        .expect("templates should parse");
    Renderer::from_tera(tera, "Test Kennel", "$")
}

pub fn catalog() -> Catalog {
    Catalog::bundled().expect("bundled catalog should be valid")
}

pub fn storefront<G: OrderGateway>(gateway: G, items_per_page: usize) -> Storefront<G> {
    Storefront::new(
        catalog(),
        renderer(),
        gateway,
        SessionOptions {
            items_per_page,
            debounce: DEBOUNCE,
        },
    )
}

/// Names of the puppy cards in rendered catalog HTML, in order.
pub fn card_names(html: &str) -> Vec<String> {
    html.split("<h3>")
        .skip(1)
        .filter_map(|chunk| chunk.split("</h3>").next())
        .map(str::to_string)
        .collect()
}

/// Gateway keeping every submission in memory.
#[derive(Default)]
pub struct RecordingGateway {
    pub submissions: RefCell<Vec<OrderSubmission>>,
}

impl OrderGateway for RecordingGateway {
    fn submit(&self, submission: &OrderSubmission) -> GatewayResult<()> {
        self.submissions.borrow_mut().push(submission.clone());
        Ok(())
    }
}

/// Gateway whose endpoint is never reachable.
pub struct OfflineGateway;

impl OrderGateway for OfflineGateway {
    fn submit(&self, _submission: &OrderSubmission) -> GatewayResult<()> {
        Err(GatewayError::Unavailable("connection refused".to_string()))
    }
}
