//! Configuration update handlers

use crate::commands::Cmd;
use crate::messages::ConfigMsg;
use crate::model::AppModel;

pub fn update_config(model: &mut AppModel, msg: ConfigMsg) -> Option<Cmd> {
    match msg {
        ConfigMsg::Reload(config) => {
            if config == model.config {
                tracing::debug!("update_config: configuration unchanged");
                return None;
            }
            tracing::info!(
                nesting = ?config.nesting,
                duplicates = ?config.duplicates,
                column = ?config.column,
                "update_config: applying new configuration"
            );
            model.set_config(config);
            model.rebuild_outline();
            Some(Cmd::RefreshOutlineView)
        }
    }
}
