use std::io::{BufRead, Write};

use chrono::Utc;

use crate::config::GalleryConfig;
use crate::contact;
use crate::error::AppResult;
use crate::gallery::{GalleryController, Outcome};
use crate::input::{Control, ShortcutKey, UiEvent};
use crate::render::{PlainSurface, Viewport};
use crate::review;
use crate::storage::KeyValueStore;
use crate::weather::wind_chill_label;

mod command;

pub use command::{parse_command, Command, CommandError, CommandLine};

const VIEWPORT_HEIGHT_PX: i32 = 800;

const PAGE_CONTROLS: [Control; 6] = [
    Control::GalleryGrid,
    Control::SearchInput,
    Control::SearchButton,
    Control::CategoryButtons,
    Control::ShowFavorites,
    Control::SortSelect,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(Vec<String>),
    Quit,
}

/// Terminal front end: one command per line, each handled to completion.
pub struct App<S> {
    gallery: GalleryController<S, PlainSurface>,
    config: GalleryConfig,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(config: GalleryConfig, store: S) -> AppResult<Self> {
        let catalog = config.load_catalog()?;
        let mut gallery = GalleryController::new(catalog, &config, store, PlainSurface::new());
        gallery.wire(&PAGE_CONTROLS);
        gallery.on_viewport(Viewport::new(0, VIEWPORT_HEIGHT_PX));
        Ok(Self { gallery, config })
    }

    pub fn gallery(&self) -> &GalleryController<S, PlainSurface> {
        &self.gallery
    }

    /// Lines rendered since the last call.
    pub fn take_output(&mut self) -> Vec<String> {
        self.gallery.surface_mut().take_output()
    }

    pub fn execute(&mut self, command: Command) -> AppResult<Flow> {
        let event = match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Scroll { top } => {
                self.gallery.on_viewport(Viewport::new(top, VIEWPORT_HEIGHT_PX));
                return Ok(Flow::Continue(self.take_output()));
            }
            Command::Contact {
                name,
                email,
                message,
            } => {
                let form = Command::contact_form(&name, &email, &message);
                return Ok(Flow::Continue(vec![self.submit_contact(&form)]));
            }
            Command::Review { query } => {
                return self
                    .review_summary(query.as_deref().unwrap_or_default())
                    .map(Flow::Continue);
            }
            Command::WindChill { temp_c, wind_kmh } => {
                return Ok(Flow::Continue(vec![format!(
                    "wind chill: {}",
                    wind_chill_label(temp_c, wind_kmh)
                )]));
            }
            Command::Filter { category } => UiEvent::CategoryClick {
                filter: Some(category),
            },
            Command::Favorites => UiEvent::ShowFavoritesClick,
            Command::Search { words } => UiEvent::SearchKey {
                text: words.join(" "),
                key: ShortcutKey::Enter,
            },
            Command::Sort { key } => UiEvent::SortChange { value: key },
            Command::Fav { id } => UiEvent::CardClick {
                action: "fav".to_string(),
                id,
            },
            Command::Details { id } => UiEvent::CardClick {
                action: "details".to_string(),
                id,
            },
        };

        let mut lines = match self.gallery.handle(&event)? {
            Some(Outcome::Details(text)) => text.lines().map(str::to_string).collect(),
            Some(Outcome::Rendered { .. }) => self.take_output(),
            None => vec![format!("nothing to do for {event:?}")],
        };
        if lines.is_empty() {
            lines.push("(no change)".to_string());
        }
        Ok(Flow::Continue(lines))
    }

    fn submit_contact(&mut self, form: &contact::ContactForm) -> String {
        let key = self.gallery.keys().contacts.clone();
        match contact::submit(
            self.gallery.store_mut(),
            &key,
            form,
            self.config.contact_required,
            Utc::now(),
        ) {
            Ok(submission) => submission.feedback,
            Err(err) => err.feedback(),
        }
    }

    fn review_summary(&mut self, query: &str) -> AppResult<Vec<String>> {
        let key = self.gallery.keys().review_count.clone();
        let summary = review::load_summary(self.gallery.store_mut(), &key, query)?;
        let mut lines: Vec<String> = summary
            .rows
            .iter()
            .map(|row| format!("{}: {}", row.label, row.value))
            .collect();
        lines.push(format!("reviews submitted: {}", summary.review_count));
        Ok(lines)
    }

    /// Reads commands until end of input or `quit`. Failed commands are reported
    /// and the loop continues.
    pub fn run_lines<I: BufRead, O: Write>(
        &mut self,
        input: I,
        mut output: O,
    ) -> std::io::Result<()> {
        for line in self.take_output() {
            writeln!(output, "{line}")?;
        }

        for line in input.lines() {
            let line = line?;
            let lines = match parse_command(&line) {
                Err(CommandError::Empty) => continue,
                Err(err) => err.to_string().lines().map(str::to_string).collect(),
                Ok(command) => match self.execute(command) {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Continue(lines)) => lines,
                    Err(err) => {
                        tracing::warn!(%err, "command failed");
                        vec![format!("error: {err}")]
                    }
                },
            };
            for line in lines {
                writeln!(output, "{line}")?;
            }
            output.flush()?;
        }
        Ok(())
    }
}
