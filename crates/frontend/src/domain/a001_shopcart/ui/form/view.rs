use super::controller::Operation;
use super::state::{Field, ResultRow, ResultTable};
use super::view_model::ShopcartFormViewModel;
use crate::shared::components::ui::{Button, Input};
use crate::shared::config::Config;
use leptos::prelude::*;

#[component]
pub fn ShopcartForm() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let vm = ShopcartFormViewModel::new(&config);
    let flash = vm.flash();

    view! {
        <div class="details-container shopcart-form">
            <div class="details-header">
                <h3>{"Shopcart REST API Service"}</h3>
            </div>

            <div id="flash_message" class="flash-message">{move || flash.get()}</div>

            <section class="details-form">
                <h4>{"Shopcart"}</h4>
                {field_input(vm, Field::ShopcartId, "ID")}
                {field_input(vm, Field::ShopcartName, "Name")}

                <div class="details-actions">
                    {Operation::SHOPCART.into_iter().map(|op| action_button(vm, op)).collect_view()}
                </div>

                <div id="search_shopcarts_results" class="table">
                    <ResultTableView table=vm.shopcart_results() />
                </div>
            </section>

            {vm.item_support().then(|| view! {
                <section class="details-form">
                    <h4>{"Item"}</h4>
                    {field_input(vm, Field::ItemId, "Item ID")}
                    {field_input(vm, Field::ItemShopcartId, "Shopcart ID")}
                    {field_input(vm, Field::ItemName, "Name")}
                    {field_input(vm, Field::ItemQuantity, "Quantity")}
                    {field_input(vm, Field::ItemPrice, "Price")}

                    <div class="details-actions">
                        {Operation::ITEM.into_iter().map(|op| action_button(vm, op)).collect_view()}
                    </div>

                    <div id="search_items_results" class="table">
                        <ResultTableView table=vm.item_results() />
                    </div>
                </section>
            })}
        </div>
    }
}

fn field_input(vm: ShopcartFormViewModel, field: Field, label: &'static str) -> impl IntoView {
    view! {
        <Input
            id=field.dom_id()
            label=label
            value=vm.field(field)
            on_input=Callback::new(move |value: String| vm.set_field(field, value))
        />
    }
}

fn action_button(vm: ShopcartFormViewModel, op: Operation) -> impl IntoView {
    let variant = match op {
        Operation::DeleteShopcart | Operation::DeleteItem | Operation::ClearShopcart => "danger",
        Operation::ResetShopcartForm | Operation::ResetItemForm => "secondary",
        _ => "primary",
    };

    view! {
        <Button
            id=op.button_id()
            variant=variant
            on_click=Callback::new(move |_: leptos::ev::MouseEvent| vm.run(op))
        >
            {op.label()}
        </Button>
    }
}

#[component]
fn ResultTableView(#[prop(into)] table: Signal<Option<ResultTable>>) -> impl IntoView {
    move || {
        table.get().map(|ResultTable { headers, rows }| {
            view! {
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {headers
                                .into_iter()
                                .map(|h| view! { <th class="table__header-cell">{h}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|ResultRow { id, cells }| view! {
                                <tr id=id class="table__row">
                                    {cells
                                        .into_iter()
                                        .map(|cell| view! { <td class="table__cell">{cell}</td> })
                                        .collect_view()}
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            }
        })
    }
}
