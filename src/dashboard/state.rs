// src/dashboard/state.rs

use crate::domain::{NewProperty, PriceUpdate, Property};

/// The two modal forms of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    AddProperty,
    UpdatePrice,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddPropertyForm {
    pub open: bool,
    pub fields: NewProperty,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePriceForm {
    pub open: bool,
    /// Read-only label shown above the price input.
    pub address: String,
    pub fields: PriceUpdate,
}

/// Everything the dashboard holds between events. Owned by `Dashboard`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    properties: Vec<Property>,
    pub add_form: AddPropertyForm,
    pub update_form: UpdatePriceForm,
}

impl DashboardState {
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Swaps in a freshly loaded list. The old list is dropped whole, never merged.
    pub fn replace_properties(&mut self, properties: Vec<Property>) {
        self.properties = properties;
    }

    pub fn find(&self, zpid: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.zpid == zpid)
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::AddProperty => self.add_form.open,
            Modal::UpdatePrice => self.update_form.open,
        }
    }

    pub fn open_add_form(&mut self) {
        self.add_form.open = true;
    }

    pub fn open_update_form(&mut self, zpid: &str, address: &str) {
        self.update_form.open = true;
        self.update_form.fields.zpid = zpid.to_string();
        self.update_form.address = address.to_string();
    }

    /// Hides the form and blanks its inputs.
    pub fn close(&mut self, modal: Modal) {
        match modal {
            Modal::AddProperty => self.add_form = AddPropertyForm::default(),
            Modal::UpdatePrice => self.update_form = UpdatePriceForm::default(),
        }
    }
}
