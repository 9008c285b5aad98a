use chrono::{Local, Utc};
use components::{
    map_component::{self, MapComponent},
    workout_form::WorkoutForm,
    workout_list::WorkoutList,
};
use gloo_console::{error, info, warn};
use leaflet::Map;
use storage::LocalStorage;
use wasm_bindgen_futures::spawn_local;
use workout_tracker_lib::{
    config::TrackerConfig,
    coords::Coords,
    form_state::{FormError, FormState},
    id::IdGenerator,
    render::{ListEntry, MarkerQueue, MarkerSpec},
    store::WorkoutStore,
    validation::FormInput,
    workout::Workout,
};
use yew::prelude::*;

mod components;
mod geolocation;
mod storage;
mod util;

const RESET_PROMPT: &str = "Are you sure to initialize the project?";

enum MainMsg {
    PositionFound(Coords),
    PositionFailed(String),
    MapReady(Map),
    MapClicked(Coords),
    Submit(FormInput),
    Focus(String),
    Reset,
}

struct Model {
    config: TrackerConfig,
    store: WorkoutStore<LocalStorage>,
    ids: IdGenerator,
    form: FormState,
    center: Option<Coords>,
    map: Option<Map>,
    markers: MarkerQueue<MarkerSpec>,
}

impl Model {
    fn add_workout(&mut self, workout: Workout, coords: Coords) -> bool {
        let added = match self.store.add(workout) {
            Ok(added) => added,
            Err(err) => {
                error!(format!("Could not save workout: {err}"));
                util::alert("Could not save the workout");
                self.form.open(coords);
                return true;
            }
        };

        info!(format!("Added workout {}", added.id()));
        let spec = MarkerSpec::for_workout(added, &self.config.popup);
        if let (Some(spec), Some(map)) = (self.markers.push(spec), &self.map) {
            map_component::add_marker(map, &spec);
        }
        true
    }
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = TrackerConfig::from_build_env();

        let mut store = WorkoutStore::new(LocalStorage::new(), config.storage_key.clone());
        let mut markers = MarkerQueue::new();
        for workout in store.load_all() {
            markers.push(MarkerSpec::for_workout(workout, &config.popup));
        }
        info!(format!("Loaded {} workouts", store.len()));

        let link = ctx.link().clone();
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(coords) => link.send_message(MainMsg::PositionFound(coords)),
                Err(err) => link.send_message(MainMsg::PositionFailed(err.to_string())),
            }
        });

        Self {
            config,
            store,
            ids: IdGenerator::new(),
            form: FormState::default(),
            center: None,
            map: None,
            markers,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::PositionFound(coords) => {
                info!(format!("Position found: {:?}", coords));
                self.center = Some(coords);
                true
            }
            MainMsg::PositionFailed(reason) => {
                error!(reason);
                util::alert("Could not get your position");
                false
            }
            MainMsg::MapReady(map) => {
                for spec in self.markers.mark_ready() {
                    map_component::add_marker(&map, &spec);
                }
                self.map = Some(map);
                false
            }
            MainMsg::MapClicked(coords) => {
                self.form.open(coords);
                true
            }
            MainMsg::Submit(input) => match self.form.submit(&input) {
                Ok((coords, workout_input)) => {
                    let created = Local::now();
                    let id = self.ids.next_id(created.with_timezone(&Utc));
                    let workout = Workout::new(id, &created, coords, workout_input);
                    self.add_workout(workout, coords)
                }
                Err(FormError::Invalid(err)) => {
                    warn!(format!("Rejected workout: {err}"));
                    util::alert(err.user_message());
                    false
                }
                Err(FormError::NotOpen) => {
                    warn!("Submitted without a map location");
                    false
                }
            },
            MainMsg::Focus(id) => {
                if let (Some(map), Some(workout)) = (&self.map, self.store.find(&id)) {
                    map_component::pan_to(map, workout.coords(), self.config.zoom_level, &self.config.pan);
                }
                false
            }
            MainMsg::Reset => {
                if util::confirm(RESET_PROMPT) {
                    if let Err(err) = self.store.reset() {
                        error!(format!("Reset failed: {err}"));
                    }
                    util::reload_page();
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let entries: Vec<ListEntry> = self.store.workouts().iter().rev().map(ListEntry::from).collect();
        let on_submit = link.callback(MainMsg::Submit);
        let on_select = link.callback(MainMsg::Focus);
        let on_reset = link.callback(|_: MouseEvent| MainMsg::Reset);

        html! { <>
            <div class="sidebar">
                <ul class="workouts">
                    <WorkoutForm open={self.form.is_open()} {on_submit} />
                    <WorkoutList {entries} {on_select} />
                </ul>
                <button class="reload" onclick={on_reset}>{"Reset"}</button>
            </div>
            if let Some(center) = self.center {
                <MapComponent
                    {center}
                    zoom={self.config.zoom_level}
                    tile_url={self.config.tile_url.clone()}
                    attribution={self.config.attribution.clone()}
                    on_ready={link.callback(MainMsg::MapReady)}
                    on_click={link.callback(MainMsg::MapClicked)}
                />
            } else {
                <div id="map" class="map"></div>
            }
        </> }
    }
}

fn main() {
    // Forwards the library's tracing events to the browser console
    tracing_wasm::set_as_global_default();
    yew::Renderer::<Model>::new().render();
}
