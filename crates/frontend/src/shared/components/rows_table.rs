use crate::shared::payload::{cell_text, columns, Row};
use leptos::prelude::*;

const MAX_COLUMNS: usize = 10;
const MAX_ROWS: usize = 100;

/// Plain table over API rows; columns come from the first row.
#[component]
pub fn RowsTable(rows: Vec<Row>) -> impl IntoView {
    let total = rows.len();
    let headers = columns(&rows, MAX_COLUMNS);

    if total == 0 {
        return view! { <div class="rows-table__empty">"Нет данных за выбранный период"</div> }
            .into_any();
    }

    let body = rows
        .into_iter()
        .take(MAX_ROWS)
        .map(|row| {
            let cells = headers
                .iter()
                .map(|key| view! { <td>{cell_text(row.get(key))}</td> })
                .collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="rows-table">
            <div class="rows-table__summary">
                {format!("Строк: {}", total)}
                {(total > MAX_ROWS).then(|| format!(" (показаны первые {})", MAX_ROWS))}
            </div>
            <table class="table__data">
                <thead>
                    <tr>
                        {headers.iter().map(|h| view! { <th>{h.clone()}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
    .into_any()
}
