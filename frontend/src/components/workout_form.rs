use gloo_console::warn;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::{validation::FormInput, workout::WorkoutKind};
use yew::prelude::*;

// How long the form stays out of the layout after hiding, so it does not slide away
const SETTLE_MILLIS: u32 = 1000;

pub enum Msg {
    KindChanged(WorkoutKind),
    Submit,
    Settled,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub open: bool,
    pub on_submit: Callback<FormInput>,
}

pub struct WorkoutForm {
    kind: WorkoutKind,
    distance: NodeRef,
    duration: NodeRef,
    cadence: NodeRef,
    elevation: NodeRef,
    settling: Option<Timeout>,
    focus_pending: bool,
}

impl WorkoutForm {
    fn value(node: &NodeRef) -> String {
        node.cast::<HtmlInputElement>().map(|input| input.value()).unwrap_or_default()
    }

    fn clear_inputs(&self) {
        for node in [&self.distance, &self.duration, &self.cadence, &self.elevation] {
            if let Some(input) = node.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        }
    }

    fn row(label: &str, class: &'static str, placeholder: &str, node: &NodeRef, hidden: bool) -> Html {
        html! {
            <div class={classes!("form__row", hidden.then_some("form__row--hidden"))}>
                <label class="form__label">{label}</label>
                <input class={classes!("form__input", class)} placeholder={placeholder.to_string()} ref={node.clone()} />
            </div>
        }
    }
}

impl Component for WorkoutForm {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance: NodeRef::default(),
            duration: NodeRef::default(),
            cadence: NodeRef::default(),
            elevation: NodeRef::default(),
            settling: None,
            focus_pending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::KindChanged(kind) => {
                self.kind = kind;
                true
            }
            Msg::Submit => {
                ctx.props().on_submit.emit(FormInput {
                    kind: self.kind,
                    distance: Self::value(&self.distance),
                    duration: Self::value(&self.duration),
                    cadence: Self::value(&self.cadence),
                    elevation: Self::value(&self.elevation),
                });
                false
            }
            Msg::Settled => {
                self.settling = None;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let open = ctx.props().open;

        if old_props.open && !open {
            self.clear_inputs();
            let link = ctx.link().clone();
            self.settling = Some(Timeout::new(SETTLE_MILLIS, move || link.send_message(Msg::Settled)));
        } else if !old_props.open && open {
            self.focus_pending = true;
        }

        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.focus_pending {
            self.focus_pending = false;
            if let Some(input) = self.distance.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let open = ctx.props().open;

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        let onchange = ctx.link().batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<WorkoutKind>() {
                Ok(kind) => Some(Msg::KindChanged(kind)),
                Err(err) => {
                    warn!(err);
                    None
                }
            }
        });

        let running = self.kind == WorkoutKind::Running;

        html! {
            <form
                class={classes!("form", (!open).then_some("hidden"))}
                style={self.settling.is_some().then_some("display: none")}
                {onsubmit}
            >
                <div class="form__row">
                    <label class="form__label">{"Type"}</label>
                    <select class="form__input form__input--type" {onchange}>
                        <option value="running" selected={running}>{"Running"}</option>
                        <option value="cycling" selected={!running}>{"Cycling"}</option>
                    </select>
                </div>
                {Self::row("Distance", "form__input--distance", "km", &self.distance, false)}
                {Self::row("Duration", "form__input--duration", "min", &self.duration, false)}
                {Self::row("Cadence", "form__input--cadence", "step/min", &self.cadence, !running)}
                {Self::row("Elev Gain", "form__input--elevation", "meters", &self.elevation, running)}
                <button class="form__btn">{"OK"}</button>
            </form>
        }
    }
}
