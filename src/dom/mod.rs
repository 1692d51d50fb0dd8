//! Binds the page controller to the reactive tree.
//!
//! On the server nothing runs: every [`PageHandle`] method falls back to plain
//! form bookkeeping. In the browser the handle owns a [`PageController`] over a
//! [`DomView`] and routes user actions and DOM events into it.

#[cfg(feature = "hydrate")]
mod view;

#[cfg(feature = "hydrate")]
pub use view::DomView;

#[cfg(feature = "hydrate")]
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::controller::PageController;
use crate::controller::PageFeatures;
use crate::models::{ContactForm, ContactSubmission};

#[cfg(feature = "hydrate")]
type SharedController = Rc<RefCell<PageController<DomView>>>;

#[derive(Clone, Copy)]
pub struct PageHandle {
    #[cfg(feature = "hydrate")]
    controller: StoredValue<Option<SharedController>, LocalStorage>,
}

impl Default for PageHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PageHandle {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            controller: StoredValue::new_local(None),
        }
    }

    #[cfg(feature = "hydrate")]
    fn shared(&self) -> Option<SharedController> {
        self.controller.try_with_value(|c| c.clone()).flatten()
    }

    #[cfg(feature = "hydrate")]
    fn with_controller<T>(&self, f: impl FnOnce(&mut PageController<DomView>) -> T) -> Option<T> {
        let shared = self.shared()?;
        let mut controller = shared.try_borrow_mut().ok()?;
        Some(f(&mut controller))
    }

    /// Creates the controller and runs its initialization. Only the first call
    /// has any effect.
    #[allow(unused_variables)]
    pub fn start(&self, features: PageFeatures) {
        #[cfg(feature = "hydrate")]
        {
            use std::rc::Weak;

            use crate::controller::PageEvent;

            if self.shared().is_some() {
                return;
            }
            let shared: SharedController = Rc::new_cyclic(|weak: &Weak<RefCell<PageController<DomView>>>| {
                let weak = weak.clone();
                let dispatch = Rc::new(move |event: PageEvent| {
                    let Some(shared) = weak.upgrade() else {
                        return;
                    };
                    let Ok(mut controller) = shared.try_borrow_mut() else {
                        return;
                    };
                    controller.handle(event);
                });
                RefCell::new(PageController::new(DomView::new(dispatch), features))
            });
            shared.borrow_mut().init();
            self.controller.set_value(Some(shared));
        }
    }

    /// Tears the controller down; later events and actions become no-ops
    pub fn stop(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(shared) = self.controller.try_update_value(Option::take).flatten() else {
                return;
            };
            let Ok(mut controller) = shared.try_borrow_mut() else {
                return;
            };
            controller.teardown();
        }
    }

    #[allow(unused_variables)]
    pub fn navigate_to_section(&self, id: &str) {
        #[cfg(feature = "hydrate")]
        self.with_controller(|c| c.navigate_to_section(id));
    }

    #[allow(unused_variables)]
    pub fn open_external_profile(&self, platform: &str) {
        #[cfg(feature = "hydrate")]
        self.with_controller(|c| c.open_external_profile(platform));
    }

    pub fn scroll_to_top(&self) {
        #[cfg(feature = "hydrate")]
        self.with_controller(|c| c.scroll_to_top());
    }

    pub fn submit_contact(&self, form: &mut ContactForm) -> Option<ContactSubmission> {
        #[cfg(feature = "hydrate")]
        if let Some(submission) = self.with_controller(|c| c.submit_contact(form)) {
            return submission;
        }
        form.begin_submit()
    }

    pub fn contact_settled(&self, form: &mut ContactForm, outcome: Result<(), String>) {
        #[cfg(feature = "hydrate")]
        if let Some(shared) = self.shared() {
            let borrowed = shared.try_borrow_mut();
            if let Ok(mut controller) = borrowed {
                controller.contact_settled(form, outcome);
                return;
            }
        }
        form.settle(outcome.is_ok());
    }
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;
    use crate::models::ContactField;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, name);
        form.set(ContactField::Email, email);
        form.set(ContactField::Message, message);
        form
    }

    #[test]
    fn invalid_submit_without_controller_touches_fields() {
        let page = PageHandle::new();
        let mut form = filled("", "bad", "");

        assert_eq!(page.submit_contact(&mut form), None);

        for field in ContactField::all() {
            assert!(form.is_touched(field), "{} not touched", field.as_str());
        }
        assert!(!form.is_pending());
    }

    #[test]
    fn valid_submit_without_controller_returns_payload() {
        let page = PageHandle::new();
        let mut form = filled("Ana", " ana@x.com ", "Hi");

        let payload = page.submit_contact(&mut form);

        assert_eq!(payload, Some(ContactSubmission::new("Ana", "ana@x.com", "Hi")));
        assert!(form.is_pending());
    }

    #[test]
    fn settled_without_controller_updates_form() {
        let page = PageHandle::new();
        let mut form = filled("Ana", "ana@x.com", "Hi");
        page.submit_contact(&mut form);

        page.contact_settled(&mut form, Err("timeout".into()));
        assert_eq!(form.value(ContactField::Name), "Ana");
        assert!(!form.is_pending());

        page.submit_contact(&mut form);
        page.contact_settled(&mut form, Ok(()));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn actions_without_controller_are_noops() {
        let page = PageHandle::new();
        page.start(PageFeatures::full());
        page.navigate_to_section("skills");
        page.open_external_profile("github");
        page.scroll_to_top();
        page.stop();
    }
}
