use serde::Deserialize;

const DEFAULT_MARGIN_PX: i32 = 200;
const DEFAULT_ROW_HEIGHT_PX: i32 = 420;
const DEFAULT_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LazyImageSettings {
    /// Distance around the viewport at which images start loading.
    pub margin_px: i32,
    /// Whether the host can report viewport proximity at all.
    pub observer_available: bool,
    pub row_height_px: i32,
    pub columns: usize,
}

impl Default for LazyImageSettings {
    fn default() -> Self {
        Self {
            margin_px: DEFAULT_MARGIN_PX,
            observer_available: true,
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
            columns: DEFAULT_COLUMNS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(top: i32, height: i32) -> Self {
        Self { top, height }
    }

    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }
}

/// Grid placement of rendered cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub row_height_px: i32,
    pub columns: usize,
}

impl CardLayout {
    pub fn slot(&self, card_id: &str, index: usize) -> ImageSlot {
        let columns = self.columns.max(1);
        let row = i32::try_from(index / columns).unwrap_or(i32::MAX);
        let top = row.saturating_mul(self.row_height_px);
        ImageSlot {
            card_id: card_id.to_string(),
            top,
            bottom: top.saturating_add(self.row_height_px),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub card_id: String,
    pub top: i32,
    pub bottom: i32,
}

impl ImageSlot {
    fn near(&self, viewport: Viewport, margin: i32) -> bool {
        self.top < viewport.bottom().saturating_add(margin)
            && self.bottom > viewport.top.saturating_sub(margin)
    }
}

/// Defers image loads until their card comes near the viewport.
///
/// Each image resolves at most once; a resolved slot is dropped from observation.
/// Without a proximity observer every image resolves at observe time.
#[derive(Debug, Clone)]
pub struct LazyImageLoader {
    settings: LazyImageSettings,
    pending: Vec<ImageSlot>,
    viewport: Option<Viewport>,
}

impl LazyImageLoader {
    pub fn new(settings: LazyImageSettings) -> Self {
        Self {
            settings,
            pending: Vec::new(),
            viewport: None,
        }
    }

    pub fn layout(&self) -> CardLayout {
        CardLayout {
            row_height_px: self.settings.row_height_px,
            columns: self.settings.columns,
        }
    }

    pub fn pending(&self) -> &[ImageSlot] {
        &self.pending
    }

    /// Starts observing a freshly rendered set of cards, replacing any earlier set.
    /// Returns the card ids whose images must load right away.
    pub fn observe<'a>(&mut self, card_ids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let layout = self.layout();
        let slots: Vec<ImageSlot> = card_ids
            .into_iter()
            .enumerate()
            .map(|(index, id)| layout.slot(id, index))
            .collect();

        if !self.settings.observer_available {
            self.pending.clear();
            return slots.into_iter().map(|slot| slot.card_id).collect();
        }

        self.pending = slots;
        match self.viewport {
            Some(viewport) => self.take_near(viewport),
            None => Vec::new(),
        }
    }

    /// Reports a viewport change and returns the card ids that became near.
    pub fn on_viewport(&mut self, viewport: Viewport) -> Vec<String> {
        self.viewport = Some(viewport);
        self.take_near(viewport)
    }

    fn take_near(&mut self, viewport: Viewport) -> Vec<String> {
        let margin = self.settings.margin_px;
        let (near, far): (Vec<ImageSlot>, Vec<ImageSlot>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|slot| slot.near(viewport, margin));
        self.pending = far;
        if !near.is_empty() {
            tracing::trace!(
                resolved = near.len(),
                remaining = self.pending.len(),
                "lazy images resolved"
            );
        }
        near.into_iter().map(|slot| slot.card_id).collect()
    }
}

impl Default for LazyImageLoader {
    fn default() -> Self {
        Self::new(LazyImageSettings::default())
    }
}
