//! Routing of UI messages into the session

use hexarea_ipc::{
    AreaReport, BackgroundCommand, CoreToUi, GridCommand, LayerAreaInfo, LayerCommand, UiToCore,
};
use tracing::{debug, warn};

use super::GridSession;
use crate::area::CalculationResult;
use crate::types::HexColor;

impl CalculationResult {
    pub fn to_report(&self) -> AreaReport {
        AreaReport {
            total_cells: self.total_cells,
            layers: self
                .layers
                .iter()
                .map(|area| LayerAreaInfo {
                    id: area.id,
                    name: area.name.clone(),
                    color: area.color.to_string(),
                    count: area.count,
                    percentage: area.percentage.clone(),
                })
                .collect(),
        }
    }
}

fn error_reply(code: &str, message: impl Into<String>) -> CoreToUi {
    let message = message.into();
    warn!("Rejected message: {} ({})", message, code);
    CoreToUi::Error {
        code: code.to_string(),
        message,
    }
}

impl GridSession {
    /// Apply one UI message. Returns the reply to send back, if any.
    /// Pointer events never reply.
    pub fn handle_message(&mut self, msg: UiToCore) -> Option<CoreToUi> {
        match msg {
            UiToCore::Grid(cmd) => {
                self.handle_grid_command(cmd);
                Some(CoreToUi::SettingsChanged(self.settings()))
            }
            UiToCore::Layer(cmd) => self.handle_layer_command(cmd),
            UiToCore::Background(cmd) => self.handle_background_command(cmd),
            UiToCore::Pointer(event) => {
                self.handle_pointer(event);
                None
            }
            UiToCore::Resize { width, height } => {
                self.resize(width, height);
                Some(CoreToUi::SettingsChanged(self.settings()))
            }
            UiToCore::ComputeAreas => {
                Some(CoreToUi::AreasComputed(self.compute_areas().to_report()))
            }
            UiToCore::RequestState => Some(self.state_message()),
        }
    }

    /// Full state snapshot message
    pub fn state_message(&self) -> CoreToUi {
        CoreToUi::State {
            settings: self.settings(),
            layers: self.layer_infos(),
            active_layer_id: self.layers.active_layer_id(),
            has_background: self.background.is_some(),
        }
    }

    fn layers_changed(&self) -> CoreToUi {
        CoreToUi::LayersChanged {
            layers: self.layer_infos(),
            active_layer_id: self.layers.active_layer_id(),
        }
    }

    fn handle_grid_command(&mut self, cmd: GridCommand) {
        match cmd {
            GridCommand::SetHexSize { size } => self.set_hex_size(size),
            GridCommand::SetBrushRadius { radius } => self.set_brush_radius(radius),
            GridCommand::SetOffset { x, y } => self.set_offset(x, y),
            GridCommand::SetGridVisible { visible } => self.set_grid_visible(visible),
            GridCommand::ToggleGrid => self.toggle_grid(),
            GridCommand::SetEraser { enabled } => self.set_eraser(enabled),
            GridCommand::ToggleEraser => self.toggle_eraser(),
        }
    }

    fn handle_layer_command(&mut self, cmd: LayerCommand) -> Option<CoreToUi> {
        let changed = match cmd {
            LayerCommand::Create { name, color } => {
                let color = match color.as_deref().map(str::parse::<HexColor>).transpose() {
                    Ok(color) => color,
                    Err(e) => return Some(error_reply("invalid_color", e.to_string())),
                };
                self.create_layer(name.as_deref(), color);
                true
            }
            LayerCommand::Delete { id } => self.delete_layer(id),
            LayerCommand::Rename { id, name } => self.rename_layer(id, &name),
            LayerCommand::SetVisible { id, visible } => self.set_layer_visible(id, visible),
            LayerCommand::ToggleVisible { id } => self.toggle_layer_visibility(id),
            LayerCommand::SetOpacity { id, opacity } => self.set_layer_opacity(id, opacity),
            LayerCommand::SetActive { id } => self.set_active_layer(id),
        };
        if !changed {
            debug!("GridSession::handle_layer_command: no change");
        }
        Some(self.layers_changed())
    }

    fn handle_background_command(&mut self, cmd: BackgroundCommand) -> Option<CoreToUi> {
        let applied = match cmd {
            BackgroundCommand::SetPosition { x, y } => self.set_background_position(x, y),
            BackgroundCommand::SetOpacity { opacity } => self.set_background_opacity(opacity),
            BackgroundCommand::SetScale { scale } => self.set_background_scale(scale),
            BackgroundCommand::Remove => {
                self.clear_background();
                true
            }
        };
        if !applied {
            return Some(error_reply(
                "no_background",
                "no background image is loaded",
            ));
        }
        Some(self.state_message())
    }
}
