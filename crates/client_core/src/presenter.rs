//! Result screen model: submission on demand, capped product cards, single
//! selection, and positional pairing of report fragments with cards.

use shared::{
    error::RequestError,
    protocol::{Price, Product, RecommendRequest, RecommendResponse},
};
use tracing::debug;

use crate::{
    lifecycle::{LifecycleSnapshot, Phase},
    report::{fragment_for, split_report},
    RecommendLifecycle,
};

pub const DEFAULT_DISPLAY_CAP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLine {
    pub name: String,
    pub prices: Vec<Price>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub index: usize,
    pub product_id: String,
    pub title: String,
    pub subtitle: String,
    pub display_price: Option<String>,
    pub options: Vec<OptionLine>,
    pub selected: bool,
}

impl ProductCard {
    fn from_product(index: usize, product: &Product, selected: bool) -> Self {
        Self {
            index,
            product_id: product.product_id.clone(),
            title: product.product_name.clone(),
            subtitle: format!(
                "{} · {} · {}",
                product.region, product.category, product.place_type
            ),
            display_price: product.display_price().map(str::to_string),
            options: product
                .options
                .iter()
                .map(|option| OptionLine {
                    name: option.option_name.clone(),
                    prices: option.prices.clone(),
                })
                .collect(),
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub phase: Phase,
    pub cards: Vec<ProductCard>,
    /// Products returned beyond the display cap.
    pub hidden: usize,
    pub report: Option<String>,
    pub selected: Option<usize>,
    pub explanation: Option<String>,
    pub error: Option<String>,
    pub no_matches: bool,
}

/// A selection is only meaningful for the response it was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub generation: u64,
}

pub struct ResultPresenter {
    lifecycle: RecommendLifecycle,
    request: RecommendRequest,
    display_cap: usize,
    selection: Option<Selection>,
}

impl ResultPresenter {
    /// The presenter gets its own lifecycle state; responses seen by other
    /// presenters sharing `lifecycle` are never shown here.
    pub fn new(
        lifecycle: &RecommendLifecycle,
        request: RecommendRequest,
        display_cap: usize,
    ) -> Self {
        Self {
            lifecycle: lifecycle.fresh(),
            request,
            display_cap,
            selection: None,
        }
    }

    pub fn request(&self) -> &RecommendRequest {
        &self.request
    }

    /// Sends the collected request. Only ever called on explicit user action.
    pub async fn submit(&self) -> Result<(), RequestError> {
        self.lifecycle.execute(&self.request).await.map(|response| {
            debug!(products = response.products.len(), "recommendations received");
        })
    }

    /// Selects the card at `index`. Re-selecting the current card keeps it selected.
    pub async fn select(&mut self, index: usize) -> bool {
        let snapshot = self.lifecycle.snapshot().await;
        if snapshot.phase() != Phase::Success {
            return false;
        }
        let visible = snapshot
            .data
            .as_ref()
            .map_or(0, |response| response.products.len().min(self.display_cap));
        if index >= visible {
            return false;
        }
        self.selection = Some(Selection {
            index,
            generation: snapshot.data_generation,
        });
        true
    }

    pub async fn view(&self) -> ResultView {
        let snapshot = self.lifecycle.snapshot().await;
        build_view(&snapshot, self.selection, self.display_cap)
    }
}

pub fn build_view(
    snapshot: &LifecycleSnapshot<RecommendResponse>,
    selection: Option<Selection>,
    display_cap: usize,
) -> ResultView {
    let phase = snapshot.phase();
    let mut view = ResultView {
        phase,
        cards: Vec::new(),
        hidden: 0,
        report: None,
        selected: None,
        explanation: None,
        error: snapshot.error.clone(),
        no_matches: false,
    };

    let (Phase::Success, Some(response)) = (phase, snapshot.data.as_ref()) else {
        return view;
    };

    let selected = selection
        .filter(|selection| selection.generation == snapshot.data_generation)
        .map(|selection| selection.index);
    let shown = response.products.len().min(display_cap);

    view.cards = response.products[..shown]
        .iter()
        .enumerate()
        .map(|(index, product)| ProductCard::from_product(index, product, selected == Some(index)))
        .collect();
    view.hidden = response.products.len() - shown;
    view.no_matches = response.products.is_empty();
    view.report = Some(response.report.clone()).filter(|report| !report.trim().is_empty());

    if let Some(index) = selected.filter(|index| *index < shown) {
        let fragments = split_report(&response.report);
        view.selected = Some(index);
        view.explanation = fragment_for(&fragments, index).map(str::to_string);
    }

    view
}

#[cfg(test)]
#[path = "tests/presenter_tests.rs"]
mod tests;
