use gloo_console::{info, warn};
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{JsCast, JsValue, prelude::{Closure, wasm_bindgen}};
use web_sys::{
    HtmlElement, Node,
    js_sys::{Object, Reflect},
};
use workout_tracker_lib::{config::PanConfig, coords::Coords, render::MarkerSpec};
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    // An `L.Map`, seen through the `setView` overload that takes options
    type AnimatedView;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view_with_options(this: &AnimatedView, center: &LatLng, zoom: f64, options: &JsValue);
}

pub struct MapComponent {
    map: Map,
    container: HtmlElement,
    click_handler: Option<Closure<dyn Fn(MouseEvent)>>,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub center: Coords,
    pub zoom: f64,
    pub tile_url: AttrValue,
    pub attribution: AttrValue,
    /// Fired once, after the view is set and tiles are attached.
    pub on_ready: Callback<Map>,
    pub on_click: Callback<Coords>,
}

impl MapComponent {
    fn render_map(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }
}

impl Component for MapComponent {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        let container: HtmlElement = document()
            .create_element("div")
            .expect("document can create a div")
            .unchecked_into();
        container.set_id("map");
        container.set_class_name("map");

        let leaflet_map = Map::new_with_element(&container, &MapOptions::default());

        Self {
            map: leaflet_map,
            container,
            click_handler: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let props = ctx.props();
        self.map.set_view(&to_lat_lng(props.center), props.zoom);
        add_tile_layer(&self.map, &props.tile_url, &props.attribution);

        let on_click = props.on_click.clone();
        let handler = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
            let lat_lng = event.lat_lng();
            on_click.emit((lat_lng.lat(), lat_lng.lng()).into());
        });
        self.map.on("click", handler.as_ref());
        self.click_handler = Some(handler);

        info!(format!("Map ready at {:?}", props.center));
        props.on_ready.emit(self.map.clone());
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.map.invalidate_size(false);
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="map-container">
                {self.render_map()}
            </div>
        }
    }
}

/// Places a pin with an open popup.
pub fn add_marker(map: &Map, spec: &MarkerSpec) {
    let popup_opts = PopupOptions::default();
    popup_opts.set_min_width(spec.min_width);
    popup_opts.set_max_width(spec.max_width);
    popup_opts.set_auto_close(spec.auto_close);
    popup_opts.set_close_on_click(spec.close_on_click);
    popup_opts.set_class_name(spec.class_name.clone());

    let popup = Popup::new(&popup_opts, None);
    popup.set_content(&spec.content.as_str().into());

    let marker = Marker::new(&to_lat_lng(spec.coords));
    marker.add_to(map);
    marker.bind_popup(&popup);
    marker.open_popup();
}

/// Moves the view to `coords`, animated as `{ animate, pan: { duration } }`.
pub fn pan_to(map: &Map, coords: Coords, zoom: f64, pan: &PanConfig) {
    let options = match pan_options(pan) {
        Ok(options) => options,
        Err(err) => {
            warn!("Could not build pan options", err);
            JsValue::UNDEFINED
        }
    };
    map.unchecked_ref::<AnimatedView>()
        .set_view_with_options(&to_lat_lng(coords), zoom, &options);
}

fn pan_options(pan: &PanConfig) -> Result<JsValue, JsValue> {
    let pan_opts = Object::new();
    Reflect::set(&pan_opts, &"duration".into(), &pan.duration_secs.into())?;

    let options = Object::new();
    Reflect::set(&options, &"animate".into(), &pan.animate.into())?;
    Reflect::set(&options, &"pan".into(), &pan_opts)?;
    Ok(options.into())
}

fn to_lat_lng(coords: Coords) -> LatLng {
    LatLng::new(coords.latitude(), coords.longitude())
}

fn add_tile_layer(map: &Map, url: &str, attribution: &str) {
    let opts = TileLayerOptions::new();
    opts.set_update_when_idle(true);
    opts.set_attribution(attribution.to_string());
    TileLayer::new_options(url, &opts).add_to(map);
}
