//! Component registry.
//!
//! Maps component names to constructors. The composing application owns
//! the registry and hands it to the controls it builds, so there is no
//! process-wide registration state.

use std::collections::BTreeMap;
use std::fmt;

use super::element::Element;
use super::tooltip::TooltipBar;
use crate::config::Config;
use crate::error::{Result, SeekBarError};

/// A child UI component with its own element.
pub trait Component: fmt::Debug {
    /// Registered name of the component.
    fn name(&self) -> &'static str;

    fn element(&self) -> &Element;

    fn element_mut(&mut self) -> &mut Element;

    /// Hand over ownership if this component is the tooltip bar.
    fn into_tooltip(self: Box<Self>) -> Option<TooltipBar> {
        None
    }
}

/// Constructor stored in the registry.
pub type ComponentFactory = Box<dyn Fn(&Config) -> Box<dyn Component>>;

/// Name -> constructor table.
#[derive(Default)]
pub struct ComponentRegistry {
    factories: BTreeMap<String, ComponentFactory>,
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("names", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ComponentRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with placeholder load/play progress bars and the tooltip bar.
    ///
    /// Hosts that draw their own bars register them on an empty registry
    /// instead.
    pub fn with_defaults() -> Self {
        let mut factories: BTreeMap<String, ComponentFactory> = BTreeMap::new();
        for name in [ProgressFill::LOAD, ProgressFill::PLAY] {
            factories.insert(
                name.to_string(),
                Box::new(move |_: &Config| -> Box<dyn Component> {
                    Box::new(ProgressFill::new(name))
                }),
            );
        }
        factories.insert(
            TooltipBar::NAME.to_string(),
            Box::new(|_: &Config| -> Box<dyn Component> { Box::new(TooltipBar::new()) }),
        );
        Self { factories }
    }

    /// Register a constructor. Names are unique.
    pub fn register<F>(&mut self, name: &str, factory: F) -> Result<()>
    where
        F: Fn(&Config) -> Box<dyn Component> + 'static,
    {
        if self.factories.contains_key(name) {
            return Err(SeekBarError::DuplicateComponent {
                name: name.to_string(),
            });
        }
        tracing::debug!(component = name, "registered component");
        self.factories.insert(name.to_string(), Box::new(factory));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Construct the tooltip bar registered under [`TooltipBar::NAME`].
    pub fn create_tooltip(&self, config: &Config) -> Result<TooltipBar> {
        self.create(TooltipBar::NAME, config)?
            .into_tooltip()
            .ok_or_else(|| SeekBarError::NotATooltip {
                name: TooltipBar::NAME.to_string(),
            })
    }

    /// Construct a registered component.
    pub fn create(&self, name: &str, config: &Config) -> Result<Box<dyn Component>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| SeekBarError::UnknownComponent {
                name: name.to_string(),
            })?;
        Ok(factory(config))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

/// Placeholder for a visual fill bar drawn by the host.
#[derive(Debug, Clone)]
pub struct ProgressFill {
    name: &'static str,
    element: Element,
}

impl ProgressFill {
    pub const LOAD: &'static str = "LoadProgressBar";
    pub const PLAY: &'static str = "PlayProgressBar";

    pub fn new(name: &'static str) -> Self {
        let mut element = Element::new("div");
        element.set_attribute("data-component", name);
        Self { name, element }
    }
}

impl Component for ProgressFill {
    fn name(&self) -> &'static str {
        self.name
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}
