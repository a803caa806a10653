//! Interactive storefront session.
//!
//! A [`Storefront`] owns all view state of one visitor: the active filters, the
//! page position, the pending (debounced) filter change and the order in
//! progress. Events are handled synchronously and each one yields the HTML to
//! display, if anything changed.

use std::time::{Duration, Instant};

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::debounce::Debouncer;
use crate::domain::filter::FilterCriteria;
use crate::domain::order::{DeliveryOption, OrderContext};
use crate::dto::order::OrderPageData;
use crate::forms::FormError;
use crate::forms::filter::{FilterForm, SelectionQuery};
use crate::forms::order::{DeliveryForm, OrderForm};
use crate::gateway::OrderGateway;
use crate::pagination::Paginator;
use crate::render::{RenderError, Renderer};
use crate::services::catalog::{apply_filters, change_page, load_catalog_page};
use crate::services::order::{
    load_order_page, load_order_page_after_failure, load_order_page_with_errors, submit_order,
};
use crate::services::ServiceError;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("unknown event: {0}")]
    UnknownVerb(String),

    #[error("invalid page number: {0}")]
    InvalidPage(String),

    #[error(transparent)]
    Form(#[from] FormError),
}

/// One visitor action.
#[derive(Debug)]
pub enum Event {
    Filter(FilterForm),
    Page(usize),
    Next,
    Previous,
    Select(SelectionQuery),
    Delivery(DeliveryForm),
    Submit(OrderForm),
    Show,
}

impl Event {
    /// Parses `verb [payload]`; blank lines and `#` comments yield `None`.
    ///
    /// Payloads are url-encoded, e.g. `filter breed=Cane+Corso&gender=Female`.
    pub fn parse(line: &str) -> Result<Option<Self>, EventError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, payload) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let payload = payload.trim();

        let event = match verb.to_lowercase().as_str() {
            "filter" => Self::Filter(FilterForm::parse(payload)?),
            "page" => Self::Page(
                payload
                    .parse()
                    .map_err(|_| EventError::InvalidPage(payload.to_string()))?,
            ),
            "next" => Self::Next,
            "prev" | "previous" => Self::Previous,
            "select" => Self::Select(SelectionQuery::parse(payload)?),
            "delivery" => Self::Delivery(DeliveryForm::parse(payload)?),
            "submit" => Self::Submit(OrderForm::parse(payload)?),
            "show" => Self::Show,
            other => return Err(EventError::UnknownVerb(other.to_string())),
        };
        Ok(Some(event))
    }
}

/// Page size and debounce delay for a session.
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    pub items_per_page: usize,
    pub debounce: Duration,
}

pub struct Storefront<G> {
    catalog: Catalog,
    renderer: Renderer,
    gateway: G,
    criteria: FilterCriteria,
    paginator: Paginator,
    pending_filters: Debouncer<FilterCriteria>,
    selection: Option<String>,
    delivery: Option<DeliveryOption>,
    last_catalog: Option<String>,
}

impl<G: OrderGateway> Storefront<G> {
    pub fn new(catalog: Catalog, renderer: Renderer, gateway: G, options: SessionOptions) -> Self {
        Self {
            catalog,
            renderer,
            gateway,
            criteria: FilterCriteria::default(),
            paginator: Paginator::new(options.items_per_page),
            pending_filters: Debouncer::new(options.debounce),
            selection: None,
            delivery: None,
            last_catalog: None,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn delivery(&self) -> Option<DeliveryOption> {
        self.delivery
    }

    /// Latest successfully rendered catalog view.
    pub fn last_catalog(&self) -> Option<&str> {
        self.last_catalog.as_deref()
    }

    /// Time until a pending filter change is due.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.pending_filters.time_until_due(now)
    }

    /// Current order total, `None` without a valid selection.
    pub fn total(&self) -> Option<Decimal> {
        let puppy = self.catalog.find(self.selection.as_deref()?)?;
        Some(OrderContext::new(puppy, self.delivery).total())
    }

    /// Handles one event and returns the HTML to display, if any.
    pub fn handle(&mut self, event: Event, now: Instant) -> Option<String> {
        match event {
            Event::Filter(form) => {
                self.pending_filters
                    .schedule(FilterCriteria::from(&form), now);
                None
            }
            Event::Page(page) => {
                self.flush_filters();
                self.render_page(page)
            }
            Event::Next => {
                self.flush_filters();
                self.render_page(self.paginator.current_page() + 1)
            }
            Event::Previous => {
                self.flush_filters();
                self.render_page(self.paginator.current_page().saturating_sub(1))
            }
            Event::Select(query) => {
                self.selection = query.id().map(str::to_string);
                self.render_order(&self.order_page(), &OrderForm::default())
            }
            Event::Delivery(form) => {
                self.delivery = form.option();
                self.render_order(&self.order_page(), &OrderForm::default())
            }
            Event::Submit(form) => self.submit(form),
            Event::Show => {
                self.flush_filters();
                self.render_catalog()
            }
        }
    }

    /// Applies a pending filter change once its debounce delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let criteria = self.pending_filters.poll(now)?;
        self.apply(criteria)
    }

    /// Applies a pending filter change immediately.
    pub fn flush_filters(&mut self) -> Option<String> {
        let criteria = self.pending_filters.flush()?;
        self.apply(criteria)
    }

    fn apply(&mut self, criteria: FilterCriteria) -> Option<String> {
        let previous = (self.criteria.clone(), self.paginator.clone());
        self.criteria = criteria;
        let page = apply_filters(&self.catalog, &self.criteria, &mut self.paginator);
        match self.renderer.catalog(&page) {
            Ok(html) => Some(self.remember(html)),
            Err(err) => {
                log::error!("Failed to render filtered catalog: {err}");
                (self.criteria, self.paginator) = previous;
                None
            }
        }
    }

    fn render_page(&mut self, page: usize) -> Option<String> {
        let data = change_page(&self.catalog, &self.criteria, &mut self.paginator, page);
        self.finish_catalog(self.renderer.catalog(&data))
    }

    fn render_catalog(&mut self) -> Option<String> {
        let data = load_catalog_page(&self.catalog, &self.criteria, &self.paginator);
        self.finish_catalog(self.renderer.catalog(&data))
    }

    fn finish_catalog(&mut self, rendered: Result<String, RenderError>) -> Option<String> {
        match rendered {
            Ok(html) => Some(self.remember(html)),
            Err(err) => {
                log::error!("Failed to render catalog: {err}");
                None
            }
        }
    }

    fn remember(&mut self, html: String) -> String {
        self.last_catalog = Some(html.clone());
        html
    }

    fn order_page(&self) -> OrderPageData {
        load_order_page(&self.catalog, self.selection.as_deref(), self.delivery)
    }

    fn render_order(&self, page: &OrderPageData, form: &OrderForm) -> Option<String> {
        self.renderer
            .order(page, form)
            .map_err(|err| log::error!("Failed to render order page: {err}"))
            .ok()
    }

    fn submit(&mut self, mut form: OrderForm) -> Option<String> {
        if form.puppy_id.trim().is_empty() {
            form.puppy_id = self.selection.clone().unwrap_or_default();
        }
        if form.delivery.trim().is_empty() {
            form.delivery = self
                .delivery
                .map(|option| option.as_str().to_string())
                .unwrap_or_default();
        }

        match submit_order(&self.catalog, &self.gateway, &form, Utc::now().naive_utc()) {
            Ok(receipt) => {
                self.selection = None;
                self.delivery = None;
                self.renderer
                    .receipt(&receipt)
                    .map_err(|err| log::error!("Failed to render receipt: {err}"))
                    .ok()
            }
            Err(ServiceError::Form(error)) => {
                self.remember_order_choices(&form);
                let page = load_order_page_with_errors(
                    &self.catalog,
                    self.selection.as_deref(),
                    self.delivery,
                    &error,
                );
                self.render_order(&page, &form)
            }
            Err(ServiceError::NotFound(id)) => {
                log::warn!("Order submitted for unknown puppy {id:?}");
                self.selection = None;
                self.render_order(&self.order_page(), &form)
            }
            Err(err @ ServiceError::Gateway(_)) => {
                log::error!("Order could not be handed off: {err}");
                self.remember_order_choices(&form);
                let page = load_order_page_after_failure(
                    &self.catalog,
                    self.selection.as_deref(),
                    self.delivery,
                );
                self.render_order(&page, &form)
            }
        }
    }

    fn remember_order_choices(&mut self, form: &OrderForm) {
        self.selection = Some(form.puppy_id.clone()).filter(|id| !id.trim().is_empty());
        self.delivery = DeliveryOption::parse_lenient(&form.delivery).or(self.delivery);
    }
}
