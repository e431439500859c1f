// src/dashboard/controller.rs

use crate::dashboard::api::PropertyApi;
use crate::dashboard::events::{DashboardEvent, EventBus, Notice};
use crate::dashboard::state::{DashboardState, Modal};
use crate::dashboard::view::{self, CardAction, DashboardView};
use crate::dashboard::ClientError;
use crate::domain::{ApiStatus, NewProperty, PriceUpdate, Property};

/// How a form submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend said `success`; the form is closed and the list reloaded.
    Accepted,
    /// The backend replied with another status; the form stays as it was.
    Rejected,
    /// Transport or decoding failure; the form stays as it was.
    Failed,
}

pub struct DashboardBuilder<A: PropertyApi> {
    api: A,
    events: EventBus,
}

impl<A: PropertyApi> DashboardBuilder<A> {
    /// Registers an observer. Observers cannot be added after `build`.
    pub fn on_event<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&DashboardEvent) + 'static,
    {
        self.events.subscribe(Box::new(listener));
        self
    }

    pub fn build(self) -> Dashboard<A> {
        Dashboard {
            api: self.api,
            state: DashboardState::default(),
            view: view::render(&[]),
            events: self.events,
        }
    }
}

/// Top-level controller. Owns the state, the last rendered view and the observers.
///
/// Every network operation comes in two halves. `submit_*` and `load_properties` call
/// the API and finish straight away; hosts that run requests elsewhere call `begin_*`,
/// send the request themselves and hand the reply to the matching `complete_*` in the
/// order replies arrive. Nothing is cancelled, so the last completed load wins.
pub struct Dashboard<A: PropertyApi> {
    api: A,
    state: DashboardState,
    view: DashboardView,
    events: EventBus,
}

impl<A: PropertyApi> Dashboard<A> {
    pub fn builder(api: A) -> DashboardBuilder<A> {
        DashboardBuilder {
            api,
            events: EventBus::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn load_properties(&mut self) -> bool {
        let result = self.api.fetch_properties();
        self.complete_load(result)
    }

    /// Replaces the list and re-renders on success. Failures are only logged; the
    /// previous list and view stay in place.
    pub fn complete_load(&mut self, result: Result<Vec<Property>, ClientError>) -> bool {
        match result {
            Ok(properties) => {
                log::debug!("Loaded {} properties", properties.len());
                self.state.replace_properties(properties);
                self.render();
                true
            }
            Err(e) => {
                log::error!("Error loading properties: {e}");
                false
            }
        }
    }

    pub fn render(&mut self) {
        self.view = view::render(self.state.properties());
        self.events.emit(DashboardEvent::Rendered(self.view.clone()));
    }

    pub fn open_add_form(&mut self) {
        self.state.open_add_form();
        self.events.emit(DashboardEvent::ModalOpened(Modal::AddProperty));
    }

    pub fn open_update_form(&mut self, zpid: &str, address: &str) {
        self.state.open_update_form(zpid, address);
        self.events.emit(DashboardEvent::ModalOpened(Modal::UpdatePrice));
    }

    /// Closes the form and blanks its fields.
    pub fn close(&mut self, modal: Modal) {
        self.state.close(modal);
        self.events.emit(DashboardEvent::ModalClosed(modal));
    }

    /// A click landed outside the forms: every open form is dismissed.
    pub fn click_outside(&mut self) {
        for modal in [Modal::AddProperty, Modal::UpdatePrice] {
            if self.state.is_open(modal) {
                self.close(modal);
            }
        }
    }

    pub fn dispatch_card(&mut self, action: &CardAction) {
        match action {
            CardAction::UpdatePrice { zpid, address } => self.open_update_form(zpid, address),
            CardAction::ShowHistory { zpid } => {
                self.show_price_history(zpid);
            }
        }
    }

    /// Copies the submitted values into the add form and returns the request body.
    pub fn begin_new_property(&mut self, fields: NewProperty) -> NewProperty {
        self.state.add_form.fields = fields.clone();
        fields
    }

    pub fn submit_new_property(&mut self, fields: NewProperty) -> SubmitOutcome {
        let request = self.begin_new_property(fields);
        let result = self.api.add_property(&request);
        self.complete_add(result)
    }

    pub fn complete_add(&mut self, result: Result<ApiStatus, ClientError>) -> SubmitOutcome {
        match result {
            Ok(status) if status.is_success() => {
                self.close(Modal::AddProperty);
                self.load_properties();
                self.notify(Notice::success("Property added successfully!"));
                SubmitOutcome::Accepted
            }
            Ok(status) => {
                log::warn!("Add property rejected with status {:?}", status.status);
                self.notify(Notice::error("Property was not added.", status.message));
                SubmitOutcome::Rejected
            }
            Err(e) => {
                log::error!("Error adding property: {e}");
                self.notify(Notice::error(
                    "Error adding property. Please try again.",
                    None,
                ));
                SubmitOutcome::Failed
            }
        }
    }

    /// Copies the values into the update form and returns the request body.
    pub fn begin_price_update(&mut self, zpid: &str, price: &str) -> PriceUpdate {
        let fields = PriceUpdate {
            zpid: zpid.to_string(),
            price: price.to_string(),
        };
        self.state.update_form.fields = fields.clone();
        fields
    }

    pub fn submit_price_update(&mut self, zpid: &str, price: &str) -> SubmitOutcome {
        let request = self.begin_price_update(zpid, price);
        let result = self.api.update_price(&request);
        self.complete_update(result)
    }

    pub fn complete_update(&mut self, result: Result<ApiStatus, ClientError>) -> SubmitOutcome {
        match result {
            Ok(status) if status.is_success() => {
                self.close(Modal::UpdatePrice);
                self.load_properties();
                self.notify(Notice::success("Price updated successfully!"));
                SubmitOutcome::Accepted
            }
            Ok(status) => {
                log::warn!("Price update rejected with status {:?}", status.status);
                self.notify(Notice::error("Price was not updated.", status.message));
                SubmitOutcome::Rejected
            }
            Err(e) => {
                log::error!("Error updating price: {e}");
                self.notify(Notice::error(
                    "Error updating price. Please try again.",
                    None,
                ));
                SubmitOutcome::Failed
            }
        }
    }

    /// Asks the host to open the export endpoint; the backend serves the file.
    pub fn export_data(&mut self) {
        let url = self.api.export_url();
        self.events.emit(DashboardEvent::Navigate(url));
    }

    /// Shows the history of a loaded property. Returns false, and shows nothing, when the
    /// ZPID is not in the current list or has no history.
    pub fn show_price_history(&mut self, zpid: &str) -> bool {
        let Some(property) = self.state.find(zpid) else {
            return false;
        };
        let Some(lines) = view::price_history_lines(property) else {
            return false;
        };

        let title = format!("Price History for {}", property.address);
        self.notify(Notice::info(title, lines));
        true
    }

    fn notify(&mut self, notice: Notice) {
        self.events.emit(DashboardEvent::Notify(notice));
    }
}
