#![forbid(unsafe_code)]

//! Panel-type to form dispatch.
//!
//! Renderers implement [`PanelForms`] with one method per [`PanelTypeId`];
//! [`dispatch`] matches exhaustively, so adding a panel type is a compile
//! error in every renderer until it handles the new form. Panels whose type
//! is not in the closed set go to [`PanelForms::unknown`].

use pawdesk_core::{PanelType, PanelTypeId};

use crate::state::PanelState;

/// Fallback text for a panel whose type no form handles.
#[must_use]
pub fn unknown_panel_message(panel_type: &str) -> String {
    format!("Unknown panel type: {panel_type}")
}

/// One form component per panel type.
pub trait PanelForms {
    type Output;

    fn booking_create(&mut self, panel: &PanelState) -> Self::Output;
    fn booking_edit(&mut self, panel: &PanelState) -> Self::Output;
    fn owner_create(&mut self, panel: &PanelState) -> Self::Output;
    fn owner_edit(&mut self, panel: &PanelState) -> Self::Output;
    fn pet_create(&mut self, panel: &PanelState) -> Self::Output;
    fn pet_edit(&mut self, panel: &PanelState) -> Self::Output;
    fn task_create(&mut self, panel: &PanelState) -> Self::Output;
    fn task_edit(&mut self, panel: &PanelState) -> Self::Output;
    fn kennel_assign(&mut self, panel: &PanelState) -> Self::Output;
    fn payment_record(&mut self, panel: &PanelState) -> Self::Output;

    /// Rendered for panel types outside the closed set.
    fn unknown(&mut self, panel: &PanelState, message: String) -> Self::Output;
}

/// Route a panel to its form.
pub fn dispatch<F: PanelForms>(forms: &mut F, panel: &PanelState) -> F::Output {
    let id = match &panel.panel_type {
        PanelType::Known(id) => *id,
        PanelType::Unknown(name) => return forms.unknown(panel, unknown_panel_message(name)),
    };
    match id {
        PanelTypeId::BookingCreate => forms.booking_create(panel),
        PanelTypeId::BookingEdit => forms.booking_edit(panel),
        PanelTypeId::OwnerCreate => forms.owner_create(panel),
        PanelTypeId::OwnerEdit => forms.owner_edit(panel),
        PanelTypeId::PetCreate => forms.pet_create(panel),
        PanelTypeId::PetEdit => forms.pet_edit(panel),
        PanelTypeId::TaskCreate => forms.task_create(panel),
        PanelTypeId::TaskEdit => forms.task_edit(panel),
        PanelTypeId::KennelAssign => forms.kennel_assign(panel),
        PanelTypeId::PaymentRecord => forms.payment_record(panel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opener::Opener;
    use crate::store::StackStore;
    use pawdesk_core::{ConfigRegistry, PanelProps};
    use std::rc::Rc;

    /// Names the form that would be mounted.
    struct FormNames;

    impl PanelForms for FormNames {
        type Output = String;

        fn booking_create(&mut self, _: &PanelState) -> String {
            "BookingForm(new)".into()
        }
        fn booking_edit(&mut self, _: &PanelState) -> String {
            "BookingForm(edit)".into()
        }
        fn owner_create(&mut self, _: &PanelState) -> String {
            "OwnerForm(new)".into()
        }
        fn owner_edit(&mut self, _: &PanelState) -> String {
            "OwnerForm(edit)".into()
        }
        fn pet_create(&mut self, _: &PanelState) -> String {
            "PetForm(new)".into()
        }
        fn pet_edit(&mut self, _: &PanelState) -> String {
            "PetForm(edit)".into()
        }
        fn task_create(&mut self, _: &PanelState) -> String {
            "TaskForm(new)".into()
        }
        fn task_edit(&mut self, _: &PanelState) -> String {
            "TaskForm(edit)".into()
        }
        fn kennel_assign(&mut self, _: &PanelState) -> String {
            "KennelAssignForm".into()
        }
        fn payment_record(&mut self, _: &PanelState) -> String {
            "PaymentForm".into()
        }
        fn unknown(&mut self, _: &PanelState, message: String) -> String {
            message
        }
    }

    fn resolve(ty: &str) -> PanelState {
        Opener::new(StackStore::new(), Rc::new(ConfigRegistry::builtin()))
            .resolve(ty.into(), PanelProps::new())
    }

    #[test]
    fn every_known_type_reaches_a_form() {
        for id in PanelTypeId::ALL {
            let out = dispatch(&mut FormNames, &resolve(id.as_str()));
            assert!(!out.starts_with("Unknown"), "{id} fell through");
        }
    }

    #[test]
    fn unknown_type_renders_fallback_message() {
        let out = dispatch(&mut FormNames, &resolve("grooming-create"));
        assert_eq!(out, "Unknown panel type: grooming-create");
    }
}
