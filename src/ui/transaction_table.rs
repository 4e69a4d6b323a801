use std::rc::Rc;

use yew::prelude::*;

use crate::filter::{category_options, derive, AmountRange, FilterCriteria, SortOrder};
use crate::format::{format_amount, format_date};
use crate::models::Transaction;

const AMOUNT_RANGES: [&str; 5] = ["0-100", "100-200", "200-300", "300-400", "400-500"];

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub account_id: i64,
    /// The full transaction set for the user; scoping to this table's
    /// account happens inside the derivation.
    pub transactions: Rc<Vec<Transaction>>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let criteria = use_state(FilterCriteria::default);

    // Options come from the unfiltered set so they never shrink while a
    // filter is active.
    let categories = use_memo(
        |transactions: &Rc<Vec<Transaction>>| category_options(transactions.as_slice()),
        props.transactions.clone(),
    );

    // Memoized on the exact input tuple: rows are recomputed when the set,
    // the account, or any criteria field changes, and not otherwise.
    let rows = use_memo(
        |(transactions, account_id, criteria): &(Rc<Vec<Transaction>>, i64, FilterCriteria)| {
            derive(transactions.as_slice(), *account_id, criteria)
        },
        (
            props.transactions.clone(),
            props.account_id,
            (*criteria).clone(),
        ),
    );

    let on_category = {
        let criteria = criteria.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let mut next = (*criteria).clone();
            next.category = if value.is_empty() { None } else { Some(value) };
            criteria.set(next);
        })
    };

    let on_sort = {
        let criteria = criteria.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*criteria).clone();
            next.sort_order = if select.value() == "asc" {
                SortOrder::Ascending
            } else {
                SortOrder::Descending
            };
            criteria.set(next);
        })
    };

    let on_amount_range = {
        let criteria = criteria.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*criteria).clone();
            next.amount_range = AmountRange::parse(&select.value());
            criteria.set(next);
        })
    };

    let on_reset = {
        let criteria = criteria.clone();
        Callback::from(move |_| {
            let mut next = (*criteria).clone();
            next.reset();
            criteria.set(next);
        })
    };

    let sort_value = match criteria.sort_order {
        SortOrder::Ascending => "asc",
        SortOrder::Descending => "desc",
    };

    html! {
        <div class="mt-4">
            <div class="flex flex-wrap gap-3 items-center mb-4">
                <select
                    value={criteria.category.clone().unwrap_or_default()}
                    onchange={on_category}
                    class="border border-slate-300 rounded p-1 text-sm"
                >
                    <option value="">{"All Categories"}</option>
                    { for categories.iter().map(|category| html! {
                        <option value={category.clone()} selected={criteria.category.as_deref() == Some(category.as_str())}>
                            { category.clone() }
                        </option>
                    }) }
                </select>

                <select value={sort_value} onchange={on_sort} class="border border-slate-300 rounded p-1 text-sm">
                    <option value="desc" selected={sort_value == "desc"}>{"Latest First"}</option>
                    <option value="asc" selected={sort_value == "asc"}>{"Earliest First"}</option>
                </select>

                <select
                    value={criteria.amount_range.map(|range| range.to_string()).unwrap_or_default()}
                    onchange={on_amount_range}
                    class="border border-slate-300 rounded p-1 text-sm"
                >
                    <option value="">{"All Amounts"}</option>
                    { for AMOUNT_RANGES.iter().map(|range| {
                        let label = match range.split_once('-') {
                            Some((min, max)) => format!("${min} - ${max}"),
                            None => range.to_string(),
                        };
                        let active = criteria.amount_range.map(|r| r.to_string()).as_deref() == Some(*range);
                        html! {
                            <option value={*range} selected={active}>{ label }</option>
                        }
                    }) }
                </select>

                <button
                    onclick={on_reset}
                    class="text-sm px-3 py-1 bg-slate-200 rounded hover:bg-slate-300 transition-colors"
                >
                    {"Reset Filters"}
                </button>
            </div>

            <div class="overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-slate-100 text-slate-500 text-[10px] uppercase tracking-widest">
                            <th class="px-4 py-3 font-bold">{"Name"}</th>
                            <th class="px-4 py-3 font-bold text-right">{"Amount"}</th>
                            <th class="px-4 py-3 font-bold">{"Category"}</th>
                            <th class="px-4 py-3 font-bold">{"Date"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">
                        { for rows.iter().enumerate().map(|(idx, txn)| html! {
                            <tr key={idx} class="text-sm hover:bg-slate-50 transition-colors">
                                <td class="px-4 py-3 text-slate-700">{ txn.name.clone() }</td>
                                <td class="px-4 py-3 text-right font-semibold text-slate-800">{ format_amount(txn.amount) }</td>
                                <td class="px-4 py-3">
                                    <span class="bg-slate-100 text-slate-600 px-2.5 py-1 rounded-full text-[10px] font-bold">{ txn.category.clone() }</span>
                                </td>
                                <td class="px-4 py-3 text-slate-500">{ format_date(txn.date) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>

            if rows.is_empty() {
                <p class="text-slate-500 text-sm mt-2">{"No transactions found."}</p>
            }
        </div>
    }
}
