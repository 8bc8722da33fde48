use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::activity::{Activity, Catalog};
use crate::domain::view::{self, ViewControls};
use crate::services::{ActionReport, ApiError, Notice};

pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Everything the board renders from: the catalog store, the toolbar
/// controls, the load lifecycle flags and the banner notice. Single writer
/// (the UI task); replaced fields, never patched catalogs.
pub struct BoardState {
    catalog: Catalog,
    pub controls: ViewControls,
    /// True until the first fetch resolves either way.
    pub loading: bool,
    /// True while the last catalog fetch has failed; the list shows a static
    /// failure message instead of cards until a refresh succeeds.
    pub load_failed: bool,
    notice: Option<Notice>,
    notice_seq: u64,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            controls: ViewControls::default(),
            loading: true,
            load_failed: false,
            notice: None,
            notice_seq: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replace the store with a fetched catalog, or flag the failure. The
    /// controls are untouched either way, so filters survive refreshes.
    pub fn apply_refresh(&mut self, result: Result<Catalog, ApiError>) {
        self.loading = false;
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.load_failed = false;
            }
            Err(_) => {
                self.load_failed = true;
            }
        }
    }

    /// Apply a mutation cycle's outcome: show its banner and, when a refresh
    /// came back with it, apply that too. Returns the notice sequence for
    /// scheduling the dismissal.
    pub fn apply_action(&mut self, report: ActionReport) -> u64 {
        let seq = self.show_notice(report.notice);
        if let Some(refresh) = report.refresh {
            self.apply_refresh(refresh);
        }
        seq
    }

    /// Show a banner notice. A later show supersedes an earlier one; the
    /// returned sequence number keeps a stale dismiss timer from hiding the
    /// newer message.
    pub fn show_notice(&mut self, notice: Notice) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(notice);
        self.notice_seq
    }

    /// Hide the banner, unless a newer notice has been shown since `seq`.
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn derived(&self) -> Vec<(&str, &Activity)> {
        view::derive(&self.catalog, &self.controls)
    }

    pub fn category_options(&self) -> Vec<String> {
        view::category_options(&self.catalog)
    }
}

/// Hide the banner after the dismiss delay, unless a newer notice replaced it.
pub fn schedule_notice_dismiss(mut board: Signal<BoardState>, seq: u64) {
    spawn(async move {
        tokio::time::sleep(NOTICE_DISMISS_AFTER).await;
        board.write().dismiss_notice(seq);
    });
}
