//! Form controller: turns a button press into at most one request and folds
//! the response back into [`FormState`].
//!
//! Everything here is synchronous and side-effect free apart from logging;
//! the view model owns the network and the signals.

use contracts::domain::a001_shopcart::aggregate::{ItemDto, ShopcartDto};
use contracts::domain::a001_shopcart::dto::{CreateItemRequest, UpdateItemRequest};

use super::render::{render_items, render_shopcarts};
use super::sequencer::{RequestSequencer, Ticket};
use super::state::{FormState, Region};
use crate::domain::a001_shopcart::api;
use crate::shared::config::{ClearMode, ControllerConfig};
use crate::shared::http::{ApiError, ApiRequest, ApiResponse};
use crate::shared::number_parse::{parse_float_prefix, parse_int_prefix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateShopcart,
    UpdateShopcart,
    RetrieveShopcart,
    DeleteShopcart,
    ClearShopcart,
    SearchShopcarts,
    ResetShopcartForm,
    CreateItem,
    RetrieveItem,
    ListItems,
    DeleteItem,
    UpdateItem,
    ResetItemForm,
}

impl Operation {
    pub const SHOPCART: [Operation; 7] = [
        Operation::CreateShopcart,
        Operation::RetrieveShopcart,
        Operation::UpdateShopcart,
        Operation::DeleteShopcart,
        Operation::ClearShopcart,
        Operation::SearchShopcarts,
        Operation::ResetShopcartForm,
    ];

    pub const ITEM: [Operation; 6] = [
        Operation::CreateItem,
        Operation::RetrieveItem,
        Operation::UpdateItem,
        Operation::DeleteItem,
        Operation::ListItems,
        Operation::ResetItemForm,
    ];

    pub fn region(self) -> Region {
        match self {
            Operation::CreateShopcart
            | Operation::UpdateShopcart
            | Operation::RetrieveShopcart
            | Operation::DeleteShopcart
            | Operation::ClearShopcart
            | Operation::SearchShopcarts
            | Operation::ResetShopcartForm => Region::Shopcart,
            Operation::CreateItem
            | Operation::RetrieveItem
            | Operation::ListItems
            | Operation::DeleteItem
            | Operation::UpdateItem
            | Operation::ResetItemForm => Region::Item,
        }
    }

    /// DOM id of the button that triggers the operation
    pub fn button_id(self) -> &'static str {
        match self {
            Operation::CreateShopcart => "create-shopcart-btn",
            Operation::UpdateShopcart => "update-shopcart-btn",
            Operation::RetrieveShopcart => "retrieve-shopcart-btn",
            Operation::DeleteShopcart => "delete-shopcart-btn",
            Operation::ClearShopcart => "clear-shopcart-btn",
            Operation::SearchShopcarts => "search-shopcart-btn",
            Operation::ResetShopcartForm => "reset-shopcart-form-btn",
            Operation::CreateItem => "create-item-btn",
            Operation::RetrieveItem => "retrieve-item-btn",
            Operation::ListItems => "list-item-btn",
            Operation::DeleteItem => "delete-item-btn",
            Operation::UpdateItem => "update-item-btn",
            Operation::ResetItemForm => "reset-item-form-btn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::CreateShopcart | Operation::CreateItem => "Create",
            Operation::UpdateShopcart | Operation::UpdateItem => "Update",
            Operation::RetrieveShopcart | Operation::RetrieveItem => "Retrieve",
            Operation::DeleteShopcart | Operation::DeleteItem => "Delete",
            Operation::ClearShopcart => "Clear",
            Operation::SearchShopcarts => "Search",
            Operation::ListItems => "List",
            Operation::ResetShopcartForm | Operation::ResetItemForm => "Clear Form",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Operation::CreateShopcart => "Shopcart has been Created!",
            Operation::UpdateShopcart => "Shopcart has been Updated!",
            Operation::DeleteShopcart => "Shopcart has been Deleted!",
            Operation::ClearShopcart => "Shopcart items cleared!",
            Operation::CreateItem => "Item has been Created!",
            Operation::UpdateItem => "Item has been Updated!",
            Operation::DeleteItem => "Item has been Deleted!",
            Operation::RetrieveShopcart
            | Operation::SearchShopcarts
            | Operation::RetrieveItem
            | Operation::ListItems => "Success",
            Operation::ResetShopcartForm | Operation::ResetItemForm => "",
        }
    }
}

/// A request handed to the view model for sending
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub operation: Operation,
    pub ticket: Ticket,
    pub request: ApiRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Send this and hand the outcome back to [`FormController::complete`]
    Request(PendingRequest),
    /// Handled locally (form reset, or a request that could not be built)
    Done,
    /// Operation not available in this form variant; nothing changed
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    /// False when the outcome was stale and discarded
    pub applied: bool,
    /// Fire-and-forget requests to issue after applying (legacy clear)
    pub follow_ups: Vec<ApiRequest>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    pub state: FormState,
    sequencer: RequestSequencer,
    item_support: bool,
    clear_mode: ClearMode,
}

impl FormController {
    pub fn new(config: &ControllerConfig) -> Self {
        if config.clear_mode == ClearMode::PerItemDelete {
            log::warn!("clear_mode = per_item_delete is deprecated; use the clear endpoint");
        }
        Self {
            state: FormState::default(),
            sequencer: RequestSequencer::new(),
            item_support: config.item_support,
            clear_mode: config.clear_mode,
        }
    }

    pub fn item_support(&self) -> bool {
        self.item_support
    }

    /// Start `op`: clear the flash area, then either apply it locally or
    /// build its request and take a ticket for the operation's region.
    pub fn dispatch(&mut self, op: Operation) -> Dispatch {
        if op.region() == Region::Item && !self.item_support {
            log::warn!("{:?} rejected: item support is disabled", op);
            return Dispatch::Rejected;
        }

        self.state.clear_flash();

        let request = match self.build_request(op) {
            None => {
                self.reset_form(op.region());
                return Dispatch::Done;
            }
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::warn!("{:?}: {}", op, e);
                self.state.set_flash(e.flash_message());
                return Dispatch::Done;
            }
        };

        let ticket = self.sequencer.dispatch(op.region());
        log::info!("{} {}", request.method.as_str(), request.path);

        Dispatch::Request(PendingRequest {
            operation: op,
            ticket,
            request,
        })
    }

    /// Clear a region's fields and drop its in-flight responses. The item
    /// form's reset also clears the cart fields.
    fn reset_form(&mut self, region: Region) {
        if region == Region::Item {
            self.sequencer.invalidate(Region::Item);
            self.state.item.clear();
        }
        self.sequencer.invalidate(Region::Shopcart);
        self.state.shopcart.clear();
    }

    /// `None` for the form resets, which are applied locally
    fn build_request(&self, op: Operation) -> Option<Result<ApiRequest, ApiError>> {
        let cart = &self.state.shopcart;
        let item = &self.state.item;

        let request = match op {
            Operation::CreateShopcart => api::create_shopcart(&cart.name),
            Operation::UpdateShopcart => api::update_shopcart(&cart.id, &cart.name),
            Operation::RetrieveShopcart => Ok(api::get_shopcart(&cart.id)),
            Operation::DeleteShopcart => Ok(api::delete_shopcart(&cart.id)),
            Operation::ClearShopcart => Ok(match self.clear_mode {
                ClearMode::Endpoint => api::clear_shopcart(&cart.id),
                ClearMode::PerItemDelete => api::get_shopcart(&cart.id),
            }),
            Operation::SearchShopcarts => api::search_shopcarts(&cart.name),
            Operation::CreateItem => api::create_item(&CreateItemRequest {
                shopcart_id: item.shopcart_id.clone(),
                name: item.name.clone(),
                quantity: item.quantity.clone(),
                price: item.price.clone(),
            }),
            Operation::RetrieveItem => Ok(api::get_item(&item.shopcart_id, &item.id)),
            Operation::ListItems => Ok(api::list_items(&item.shopcart_id)),
            Operation::DeleteItem => Ok(api::delete_item(&item.shopcart_id, &item.id)),
            Operation::UpdateItem => api::update_item(
                &item.id,
                &UpdateItemRequest {
                    shopcart_id: item.shopcart_id.clone(),
                    name: item.name.clone(),
                    quantity: parse_int_prefix(&item.quantity),
                    price: parse_float_prefix(&item.price),
                },
            ),
            Operation::ResetShopcartForm | Operation::ResetItemForm => return None,
        };

        Some(request)
    }

    /// Fold the outcome of `pending` into the form, unless a newer request
    /// for the same region has been dispatched since.
    pub fn complete(
        &mut self,
        pending: &PendingRequest,
        outcome: Result<ApiResponse, ApiError>,
    ) -> Completion {
        let op = pending.operation;

        if !self.sequencer.is_current(pending.ticket) {
            log::debug!(
                "{:?}: discarding stale response to {} {}",
                op,
                pending.request.method.as_str(),
                pending.request.path
            );
            return Completion::default();
        }

        let applied = outcome.and_then(|response| self.apply_success(op, &response));

        match applied {
            Ok(follow_ups) => {
                self.state.set_flash(op.success_message());
                Completion {
                    applied: true,
                    follow_ups,
                }
            }
            Err(e) => {
                log::warn!("{:?} failed: {}", op, e);
                self.apply_failure(op);
                self.state.set_flash(e.flash_message());
                Completion {
                    applied: true,
                    follow_ups: Vec::new(),
                }
            }
        }
    }

    /// Decode first, mutate after, so a malformed body leaves the form untouched
    fn apply_success(
        &mut self,
        op: Operation,
        response: &ApiResponse,
    ) -> Result<Vec<ApiRequest>, ApiError> {
        let state = &mut self.state;

        match op {
            Operation::CreateShopcart | Operation::UpdateShopcart | Operation::RetrieveShopcart => {
                let cart: ShopcartDto = response.json()?;
                state.shopcart.populate(&cart);
            }
            Operation::DeleteShopcart => {
                response.ensure_success()?;
                state.shopcart.clear();
            }
            Operation::ClearShopcart => match self.clear_mode {
                ClearMode::Endpoint => {
                    response.ensure_success()?;
                    state.shopcart.clear();
                }
                ClearMode::PerItemDelete => {
                    let cart: ShopcartDto = response.json()?;
                    let cart_id = cart.id.as_string();
                    let deletes = cart
                        .items
                        .iter()
                        .map(|item| api::delete_item(&cart_id, &item.id.as_string()))
                        .collect();
                    state.shopcart.clear();
                    return Ok(deletes);
                }
            },
            Operation::SearchShopcarts => {
                let carts: Vec<ShopcartDto> = response.json()?;
                state.shopcart_results = Some(render_shopcarts(&carts));
                if let Some(first) = carts.first() {
                    state.shopcart.populate(first);
                }
            }
            Operation::CreateItem | Operation::UpdateItem => {
                let item: ItemDto = response.json()?;
                state.item.populate(&item);
            }
            Operation::RetrieveItem => {
                let item: ItemDto = response.json()?;
                state.item_results = Some(render_items(std::slice::from_ref(&item)));
                state.item.populate(&item);
            }
            Operation::ListItems => {
                let items: Vec<ItemDto> = response.json()?;
                state.item_results = Some(render_items(&items));
                if let Some(first) = items.first() {
                    state.item.populate(first);
                }
            }
            Operation::DeleteItem => {
                response.ensure_success()?;
                state.item.clear();
            }
            Operation::ResetShopcartForm | Operation::ResetItemForm => {}
        }

        Ok(Vec::new())
    }

    fn apply_failure(&mut self, op: Operation) {
        match op {
            Operation::RetrieveShopcart => self.state.shopcart.clear(),
            Operation::RetrieveItem => self.state.item.clear(),
            _ => {}
        }
    }
}
