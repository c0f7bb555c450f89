use leptos::prelude::*;
use thaw::*;

/// Чекбокс выбора строки.
///
/// Клик не всплывает до строки, иначе строка откроет диалог.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    checked: Signal<bool>,

    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
        </TableCell>
    }
}
