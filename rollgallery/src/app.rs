//! Gallery application
//!
//! Fetches the note list once in the background, cuts it into roll cards,
//! and renders either the card grid or the focused layout (main view plus
//! side list). All layout decisions derive from the card slots in the
//! gallery view-model.

use crate::card::{self, GRID_CARD_SIZE, LIST_CARD_SIZE};
use crate::gallery::{CardSlot, Gallery};
use crate::loader::{self, FetchResult};
use crossbeam_channel::{Receiver, TryRecvError};
use egui::{Context, ScrollArea};
use rollcore::remote::NOTES_URL;
use rollcore::theme::{self, Colormaps};

/// Where the note data currently stands.
enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

pub struct GalleryApp {
    gallery: Option<Gallery>,
    load: LoadState,
    /// In-flight fetch; dropped (and its late result discarded) when a
    /// reload supersedes it.
    pending: Option<Receiver<FetchResult>>,
    colormaps: Colormaps,
}

impl GalleryApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::apply_visuals(&cc.egui_ctx);
        Self {
            gallery: None,
            load: LoadState::Loading,
            pending: Some(loader::spawn_fetch(
                NOTES_URL.to_owned(),
                cc.egui_ctx.clone(),
            )),
            colormaps: Colormaps::new(),
        }
    }

    /// Drop any in-flight fetch and start over.
    fn reload(&mut self, ctx: &Context) {
        self.gallery = None;
        self.load = LoadState::Loading;
        self.pending = Some(loader::spawn_fetch(NOTES_URL.to_owned(), ctx.clone()));
    }

    /// Poll the fetch channel once per frame.
    fn poll_fetch(&mut self) {
        let Some(rx) = &self.pending else { return };
        match rx.try_recv() {
            Ok(Ok(notes)) => {
                log::info!("loaded {} notes", notes.len());
                self.gallery = Some(Gallery::new(notes));
                self.load = LoadState::Ready;
                self.pending = None;
            }
            Ok(Err(err)) => {
                self.load = LoadState::Failed(err.to_string());
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.load = LoadState::Failed("note loader stopped unexpectedly".into());
                self.pending = None;
            }
        }
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        ui.horizontal(|ui| {
            ui.heading("pianoroll gallery");
            ui.separator();

            let has_more = self.gallery.as_ref().map_or(false, Gallery::has_more);
            if ui
                .add_enabled(has_more, egui::Button::new("load more"))
                .clicked()
            {
                if let Some(gallery) = self.gallery.as_mut() {
                    let added = gallery.generate_batch();
                    log::info!("added {added} rolls");
                }
            }
            if ui.button("reload").clicked() {
                self.reload(ctx);
            }
        });
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        let status = match &self.load {
            LoadState::Loading => "loading note data...".to_string(),
            LoadState::Failed(err) => format!("load failed: {err}"),
            LoadState::Ready => match &self.gallery {
                Some(gallery) => {
                    let mut status = format!(
                        "{} rolls  |  {} notes",
                        gallery.cards().len(),
                        gallery.note_count(),
                    );
                    if let Some(sel) =
                        gallery.focused_card().and_then(|c| c.selection.captured())
                    {
                        let (lo, hi) = sel.bounds();
                        status.push_str(&format!("  |  selection [{lo:.2}, {hi:.2}]"));
                    }
                    status
                }
                None => "no data".to_string(),
            },
        };
        ui.label(status);
    }

    /// The scrollable card grid, shown while nothing is focused.
    fn render_grid(&mut self, ui: &mut egui::Ui) {
        let Some(gallery) = self.gallery.as_mut() else {
            return;
        };
        let colormaps = &self.colormaps;
        let mut clicked = None;

        ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for card in gallery.cards_mut() {
                    if card.slot != CardSlot::Grid {
                        continue;
                    }
                    let response = card::roll_card(ui, card, GRID_CARD_SIZE, colormaps);
                    if response.clicked() {
                        clicked = Some(card.id);
                    }
                }
            });
        });

        if let Some(id) = clicked {
            gallery.focus(id);
        }
    }

    /// Focused layout: the expanded card in the center, everything else in
    /// a scrollable side list.
    fn render_focused(&mut self, ctx: &Context) {
        let Some(gallery) = self.gallery.as_mut() else {
            return;
        };
        let colormaps = &self.colormaps;
        let mut clicked = None;

        egui::SidePanel::right("roll_list")
            .default_width(LIST_CARD_SIZE.x + 24.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    for card in gallery.cards_mut() {
                        if card.slot != CardSlot::Listed {
                            continue;
                        }
                        let response = card::roll_card(ui, card, LIST_CARD_SIZE, colormaps);
                        if response.clicked() {
                            clicked = Some(card.id);
                        }
                        ui.add_space(4.0);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let size = (ui.available_size() - egui::vec2(0.0, 24.0)).max(egui::vec2(50.0, 50.0));
            for card in gallery.cards_mut() {
                if card.slot == CardSlot::Focused {
                    card::roll_card(ui, card, size, colormaps);
                    break;
                }
            }
        });

        if let Some(id) = clicked {
            gallery.focus(id);
        }
    }

    fn render_placeholder(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            match &self.load {
                LoadState::Loading => {
                    ui.label("loading note data...");
                }
                LoadState::Failed(err) => {
                    ui.label(format!("could not load notes: {err}"));
                    ui.label("use reload to try again");
                }
                LoadState::Ready => {
                    ui.label("no rolls to show");
                }
            }
        });
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            self.render_top_bar(ui, ctx);
        });
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        let has_focus = self.gallery.as_ref().and_then(Gallery::focused).is_some();
        if has_focus {
            self.render_focused(ctx);
        } else {
            egui::CentralPanel::default().show(ctx, |ui| {
                let has_cards = self
                    .gallery
                    .as_ref()
                    .map_or(false, |g| !g.cards().is_empty());
                if has_cards {
                    self.render_grid(ui);
                } else {
                    self.render_placeholder(ui);
                }
            });
        }
    }
}
