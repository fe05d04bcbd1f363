//! Plain-text slideout renderer.

use pawdesk_runtime::{PanelForms, PanelState, RendererView, dispatch};
use serde_json::Value;

/// Renders each form as a one-line summary of the props it was opened with.
#[derive(Debug, Default)]
pub struct TextForms;

impl TextForms {
    fn form(name: &str, panel: &PanelState, fields: &[&str]) -> String {
        let shown: Vec<String> = fields
            .iter()
            .filter_map(|f| panel.props.get(f).map(|v| format!("{f}={}", plain(v))))
            .collect();
        if shown.is_empty() {
            format!("<{name}>")
        } else {
            format!("<{name} {}>", shown.join(" "))
        }
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl PanelForms for TextForms {
    type Output = String;

    fn booking_create(&mut self, panel: &PanelState) -> String {
        Self::form("BookingForm", panel, &["ownerId", "petId"])
    }
    fn booking_edit(&mut self, panel: &PanelState) -> String {
        Self::form("BookingForm", panel, &["bookingId"])
    }
    fn owner_create(&mut self, panel: &PanelState) -> String {
        Self::form("OwnerForm", panel, &[])
    }
    fn owner_edit(&mut self, panel: &PanelState) -> String {
        Self::form("OwnerForm", panel, &["ownerId"])
    }
    fn pet_create(&mut self, panel: &PanelState) -> String {
        Self::form("PetForm", panel, &["ownerId"])
    }
    fn pet_edit(&mut self, panel: &PanelState) -> String {
        Self::form("PetForm", panel, &["petId"])
    }
    fn task_create(&mut self, panel: &PanelState) -> String {
        Self::form("TaskForm", panel, &["bookingId"])
    }
    fn task_edit(&mut self, panel: &PanelState) -> String {
        Self::form("TaskForm", panel, &["taskId"])
    }
    fn kennel_assign(&mut self, panel: &PanelState) -> String {
        Self::form("KennelAssignment", panel, &["bookingId"])
    }
    fn payment_record(&mut self, panel: &PanelState) -> String {
        Self::form("PaymentForm", panel, &["bookingId", "amount"])
    }

    fn unknown(&mut self, _panel: &PanelState, message: String) -> String {
        format!("!! {message}")
    }
}

/// One frame of the slideout: header line plus form body, or `[closed]`.
pub fn render(view: &RendererView) -> String {
    let Some(panel) = &view.current_panel else {
        return "[closed]".to_owned();
    };
    let back = match (&view.previous_label, view.has_back_action) {
        (Some(label), true) => format!("< {label} | "),
        (None, true) => "< Back | ".to_owned(),
        _ => String::new(),
    };
    let mut header = format!("[{}|{}] {back}{}", view.depth, panel.width, panel.title);
    if !panel.description.is_empty() {
        header.push_str(" - ");
        header.push_str(&panel.description);
    }
    format!("{header}\n    {}", dispatch(&mut TextForms, panel))
}
