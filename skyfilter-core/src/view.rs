//! View model of the filter page.
//!
//! Holds the switches and images found on the page, built once at start-up
//! and passed by reference into every recomputation instead of re-querying
//! the page.

use crate::{
    apply_matches, read_selection, validate_encodings, EncodingConventions, EncodingReport,
    FilterConfig, FilterError, FilterSelection, ImageEntry, Switch,
};

#[derive(Clone, Debug)]
pub struct FilterView {
    config: FilterConfig,
    switches: Vec<Switch>,
    images: Vec<ImageEntry>,
}

impl FilterView {
    pub fn new(
        config: FilterConfig,
        switches: Vec<Switch>,
        images: Vec<ImageEntry>,
    ) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self {
            config,
            switches,
            images,
        })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn conventions(&self) -> &EncodingConventions {
        &self.config.conventions
    }

    pub fn switches(&self) -> &[Switch] {
        &self.switches
    }

    pub fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    /// Set every switch with this name. Returns false if none exists.
    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        let mut found = false;
        for switch in self.switches.iter_mut().filter(|s| s.name == name) {
            switch.checked = checked;
            found = true;
        }
        found
    }

    /// Flip every switch with this name. Returns false if none exists.
    pub fn toggle(&mut self, name: &str) -> bool {
        let mut found = false;
        for switch in self.switches.iter_mut().filter(|s| s.name == name) {
            switch.checked = !switch.checked;
            found = true;
        }
        found
    }

    /// Overwrite checked states positionally from a fresh read of the page.
    pub fn sync_switches(&mut self, states: impl IntoIterator<Item = bool>) {
        for (switch, checked) in self.switches.iter_mut().zip(states) {
            switch.checked = checked;
        }
    }

    /// Active tokens for the current switch states.
    pub fn selection(&self) -> FilterSelection {
        read_selection(&self.switches, &self.config.conventions)
    }

    /// Re-evaluate every image against the current selection.
    ///
    /// Returns the indices of the images now visible.
    pub fn recompute(&mut self) -> Vec<usize> {
        let selection = self.selection();
        let revealed = apply_matches(&selection, &mut self.images, &self.config.conventions);

        log::debug!(
            "Filter selection {:?} reveals {} image(s)",
            selection.tokens(),
            revealed.len()
        );
        if revealed.is_empty() {
            log::debug!(
                "No image encodes {:?}",
                selection.joined(&self.config.conventions)
            );
        }

        revealed
    }

    pub fn visible_images(&self) -> impl Iterator<Item = &ImageEntry> {
        self.images.iter().filter(|i| i.visible)
    }

    /// Observation statuses plotted by the active colours, in catalogue order.
    pub fn active_statuses(&self) -> Vec<&str> {
        let selection = self.selection();
        let mut statuses: Vec<&str> = Vec::new();

        for colour in &self.config.colours {
            if !selection.tokens().iter().any(|t| *t == colour.name) {
                continue;
            }
            for status in &colour.statuses {
                if !statuses.contains(&status.as_str()) {
                    statuses.push(status);
                }
            }
        }

        statuses
    }

    /// Compare the images on the page against the declared colours.
    pub fn validate(&self) -> EncodingReport {
        validate_encodings(&self.config.colours, &self.images, &self.config.conventions)
    }
}
