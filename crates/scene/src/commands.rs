//! Inbound UI message dispatch
//!
//! Front ends push parsed [`UiToBevy`] messages into [`UiInbox`]; one system
//! drains it each frame and turns them into paint and camera requests.

use bevy::prelude::*;
use livery_config::{PaletteConfig, ViewerConfig};
use livery_ipc::{CameraCommand, ColorValue, PaintCommand, UiToBevy};
use livery_materials::{ColorError, Rgb};

use crate::OutboundUiMessages;
use crate::car_model::PaintRequest;
use crate::error::SceneError;
use crate::framing::CameraRequest;
use crate::views::CameraView;

/// Resource for queuing messages received from the UI
#[derive(Resource, Default)]
pub struct UiInbox {
    pub messages: Vec<UiToBevy>,
}

impl UiInbox {
    /// Queue a message for the next dispatch
    pub fn push(&mut self, msg: UiToBevy) {
        self.messages.push(msg);
    }

    /// Take all queued messages, leaving the queue empty
    pub fn drain(&mut self) -> Vec<UiToBevy> {
        std::mem::take(&mut self.messages)
    }
}

/// A UI message resolved against the palette
#[derive(Debug, Clone, PartialEq)]
pub enum SceneRequest {
    Paint(PaintRequest),
    Camera(CameraRequest),
}

/// Interpret a color sent by the page
pub fn color_from_value(value: &ColorValue) -> Result<Rgb, ColorError> {
    match value {
        ColorValue::Hex(hex) => Ok(Rgb::from_hex(*hex)),
        ColorValue::Rgb(components) => Ok(Rgb::from(*components)),
        ColorValue::Text(text) => text.parse(),
    }
}

/// Resolve one UI message
pub fn resolve(message: &UiToBevy, palette: &PaletteConfig) -> Result<SceneRequest, SceneError> {
    let request = match message {
        UiToBevy::PaintCommand(command) => SceneRequest::Paint(match command {
            PaintCommand::ChangeColor { color } => PaintRequest::Color(color_from_value(color)?),
            PaintCommand::SelectSwatch { index } => {
                let swatch = palette
                    .get(*index)
                    .ok_or(SceneError::UnknownSwatch(*index))?;
                PaintRequest::Color(Rgb::from_hex(swatch.hex))
            }
            PaintCommand::Reset => PaintRequest::Factory,
        }),
        UiToBevy::CameraCommand(command) => SceneRequest::Camera(match command {
            CameraCommand::SetView { view } => CameraRequest::View(view.parse::<CameraView>()?),
            CameraCommand::SetAngle { degrees } => CameraRequest::View(CameraView::Angle(*degrees)),
            CameraCommand::FocusPart { name } => CameraRequest::FocusPart(name.clone()),
            CameraCommand::FitToModel => CameraRequest::FitToModel,
            CameraCommand::Reset => CameraRequest::Reset,
        }),
    };
    Ok(request)
}

/// Drain the inbox into paint and camera messages
pub(crate) fn dispatch_ui_messages(
    mut inbox: ResMut<UiInbox>,
    config: Res<ViewerConfig>,
    mut paint_requests: MessageWriter<PaintRequest>,
    mut camera_requests: MessageWriter<CameraRequest>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    for message in inbox.drain() {
        match resolve(&message, &config.palette) {
            Ok(SceneRequest::Paint(request)) => {
                paint_requests.write(request);
            }
            Ok(SceneRequest::Camera(request)) => {
                camera_requests.write(request);
            }
            Err(err) => {
                warn!("Rejected {:?}: {}", message, err);
                outbound.send(err.to_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint(command: PaintCommand) -> UiToBevy {
        UiToBevy::PaintCommand(command)
    }

    fn camera(command: CameraCommand) -> UiToBevy {
        UiToBevy::CameraCommand(command)
    }

    #[test]
    fn test_color_values() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        assert_eq!(color_from_value(&ColorValue::Hex(0xff0000)), Ok(red));
        assert_eq!(color_from_value(&ColorValue::Rgb([1.0, 0.0, 0.0])), Ok(red));
        assert_eq!(color_from_value(&ColorValue::Text("red".to_string())), Ok(red));
        assert!(color_from_value(&ColorValue::Text("#zzz".to_string())).is_err());
    }

    #[test]
    fn test_resolve_swatch() {
        let palette = PaletteConfig::default();
        let request = resolve(&paint(PaintCommand::SelectSwatch { index: 2 }), &palette).unwrap();
        assert_eq!(
            request,
            SceneRequest::Paint(PaintRequest::Color(Rgb::from_hex(0xf2f2ef)))
        );

        let err = resolve(&paint(PaintCommand::SelectSwatch { index: 99 }), &palette).unwrap_err();
        assert!(matches!(err, SceneError::UnknownSwatch(99)));
    }

    #[test]
    fn test_resolve_reset_and_invalid_color() {
        let palette = PaletteConfig::default();
        assert_eq!(
            resolve(&paint(PaintCommand::Reset), &palette).unwrap(),
            SceneRequest::Paint(PaintRequest::Factory)
        );

        let bad = paint(PaintCommand::ChangeColor {
            color: ColorValue::Text("not-a-color".to_string()),
        });
        assert!(matches!(
            resolve(&bad, &palette),
            Err(SceneError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_resolve_camera_commands() {
        let palette = PaletteConfig::default();

        assert_eq!(
            resolve(&camera(CameraCommand::SetView { view: "Top".to_string() }), &palette).unwrap(),
            SceneRequest::Camera(CameraRequest::View(CameraView::Top))
        );
        assert_eq!(
            resolve(&camera(CameraCommand::SetAngle { degrees: 120.0 }), &palette).unwrap(),
            SceneRequest::Camera(CameraRequest::View(CameraView::Angle(120.0)))
        );
        assert!(matches!(
            resolve(&camera(CameraCommand::SetView { view: "under".to_string() }), &palette),
            Err(SceneError::InvalidView(_))
        ));
    }

    #[test]
    fn test_inbox_drain_empties_queue() {
        let mut inbox = UiInbox::default();
        inbox.push(paint(PaintCommand::Reset));
        inbox.push(camera(CameraCommand::FitToModel));

        assert_eq!(inbox.drain().len(), 2);
        assert!(inbox.drain().is_empty());
    }
}
