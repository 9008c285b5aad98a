use workout_tracker_lib::render::{Detail, ListEntry};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    /// Newest first.
    pub entries: Vec<ListEntry>,
    pub on_select: Callback<String>,
}

#[function_component]
pub fn WorkoutList(props: &Props) -> Html {
    props
        .entries
        .iter()
        .map(|entry| {
            let id = entry.id.clone();
            let on_select = props.on_select.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_select.emit(id.clone()));

            html! {
                <li key={entry.id.clone()} class={entry.class()} data-id={entry.id.clone()} {onclick}>
                    <h2 class="workout__title">{entry.title.clone()}</h2>
                    {for entry.details.iter().map(detail)}
                </li>
            }
        })
        .collect()
}

fn detail(detail: &Detail) -> Html {
    html! {
        <div class="workout__details">
            <span class="workout__icon">{detail.icon}</span>
            <span class="workout__value">{detail.value.clone()}</span>
            <span class="workout__unit">{detail.unit}</span>
        </div>
    }
}
