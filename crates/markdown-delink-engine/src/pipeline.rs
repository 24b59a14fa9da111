//! Composes the two passes the way a host application applies them.

use serde::{Deserialize, Serialize};

use crate::hyperlinks::remove_hyperlinks;
use crate::policy::{HyperlinkOptions, WikilinkOptions};
use crate::wikilinks::remove_wikilinks;

/// The order in which enabled passes run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassOrder {
    #[default]
    HyperlinksFirst,
    WikilinksFirst,
}

/// Everything needed to process one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovalSettings {
    pub remove_hyperlinks: bool,
    pub remove_wikilinks: bool,
    pub order: PassOrder,
    pub hyperlinks: HyperlinkOptions,
    pub wikilinks: WikilinkOptions,
}

impl Default for RemovalSettings {
    fn default() -> Self {
        Self {
            remove_hyperlinks: true,
            remove_wikilinks: true,
            order: PassOrder::default(),
            hyperlinks: HyperlinkOptions::default(),
            wikilinks: WikilinkOptions::default(),
        }
    }
}

#[derive(Clone, Copy)]
enum Pass {
    Hyperlinks,
    Wikilinks,
}

/// Runs the enabled passes over `text` in `settings.order`.
///
/// Each pass consumes the previous pass's output. With both passes disabled
/// the text comes back unchanged.
pub fn process_text(text: &str, settings: &RemovalSettings) -> String {
    let passes = match settings.order {
        PassOrder::HyperlinksFirst => [Pass::Hyperlinks, Pass::Wikilinks],
        PassOrder::WikilinksFirst => [Pass::Wikilinks, Pass::Hyperlinks],
    };

    let mut result = text.to_string();
    for pass in passes {
        match pass {
            Pass::Hyperlinks if settings.remove_hyperlinks => {
                log::trace!("running hyperlink pass over {} bytes", result.len());
                result = remove_hyperlinks(&result, &settings.hyperlinks);
            }
            Pass::Wikilinks if settings.remove_wikilinks => {
                log::trace!("running wikilink pass over {} bytes", result.len());
                result = remove_wikilinks(&result, &settings.wikilinks);
            }
            _ => {}
        }
    }
    result
}
