use std::cell::RefCell;
use std::rc::Rc;

use checklist::{Checklist, Config, DeferredRender, ItemId, RowModel, Store};
use zoon::*;

mod logging;
mod storage;
mod view;

use storage::LocalStorage;
use view::ZoonView;

/// Optional JSON overrides for `checklist::Config`.
static CONFIG_STORAGE_KEY: &str = "checklist-config";

fn main() {
    logging::init(log::LevelFilter::Info);
    start_app("app", App::new);
}

fn surface_color() -> Rgba {
    color!("rgba(21, 27, 44, 0.92)")
}

fn primary_text_color() -> Rgba {
    color!("#f1f4ff")
}

fn muted_text_color() -> Rgba {
    color!("rgba(226, 232, 255, 0.7)")
}

type SharedChecklist = Rc<RefCell<Checklist<LocalStorage, ZoonView>>>;

#[derive(Clone)]
struct App {
    checklist: SharedChecklist,
    view: ZoonView,
}

impl App {
    fn new() -> impl Element {
        let config = Self::load_config();
        let view = ZoonView::new();
        let checklist = Checklist::start(config, LocalStorage, view.clone());
        Self {
            checklist: Rc::new(RefCell::new(checklist)),
            view,
        }
        .root()
    }

    fn load_config() -> Config {
        let Some(json) = LocalStorage.read(CONFIG_STORAGE_KEY) else {
            return Config::default();
        };
        Config::from_json(&json).unwrap_or_else(|error| {
            log::warn!("Ignoring '{CONFIG_STORAGE_KEY}': {error}");
            Config::default()
        })
    }

    fn submit(&self) {
        self.checklist.borrow_mut().submit();
    }

    fn complete(&self, id: ItemId) {
        let render = self.checklist.borrow_mut().complete(id);
        if let Some(render) = render {
            self.schedule_render(render);
        }
    }

    fn clear_all(&self) {
        self.checklist.borrow_mut().clear_all();
    }

    fn schedule_render(&self, render: DeferredRender) {
        let checklist = self.checklist.clone();
        Task::start(async move {
            Timer::sleep(render.delay_ms).await;
            checklist.borrow_mut().run_deferred_render(render.ticket);
        });
    }

    fn root(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill().max(560))
            .s(Align::new().center_x())
            .s(Padding::new().x(16).y(24))
            .s(Gap::new().y(14))
            .s(Font::new().color(primary_text_color()))
            .item(self.header())
            .item(self.entry_form())
            .item(self.status_line())
            .item(self.item_rows())
            .item(self.clear_button())
    }

    fn header(&self) -> impl Element + use<> {
        El::new()
            .s(Font::new().size(24).weight(FontWeight::SemiBold))
            .child("My List")
    }

    fn entry_form(&self) -> impl Element + use<> {
        Row::new()
            .s(Width::fill())
            .s(Gap::new().x(8))
            .item(self.entry_input())
            .item(self.add_button())
    }

    fn entry_input(&self) -> impl Element + use<> {
        TextInput::new()
            .id("newItem")
            .s(Width::fill())
            .s(Padding::new().x(12).y(8))
            .s(RoundedCorners::all(10))
            .s(Background::new().color(surface_color()))
            .label_hidden("New item")
            .placeholder(Placeholder::new("Add an item"))
            .text_signal(self.view.input_signal())
            .focus_signal(self.view.focus_signal())
            .update_raw_el(|raw_el| raw_el.attr("autocomplete", "off"))
            .on_change({
                let view = self.view.clone();
                move |text| view.on_input_change(text)
            })
            .on_key_down_event({
                let this = self.clone();
                move |event| event.if_key(Key::Enter, || this.submit())
            })
    }

    fn add_button(&self) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        Button::new()
            .s(Padding::new().x(14).y(8))
            .s(RoundedCorners::all(10))
            .s(Background::new().color_signal(
                hovered
                    .signal()
                    .map_bool(|| color!("rgba(108, 162, 255, 0.75)"), || color!("rgba(72, 108, 176, 0.6)")),
            ))
            .label("Add")
            .on_hovered_change(move |is_hovered| hovered.set(is_hovered))
            .on_press({
                let this = self.clone();
                move || this.submit()
            })
    }

    fn status_line(&self) -> impl Element + use<> {
        El::new()
            .s(Font::new().size(13).color(muted_text_color()))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("id", "confirmation")
                    .attr("role", "status")
                    .attr("aria-live", "polite")
            })
            .child(Text::with_signal(self.view.status_signal()))
    }

    fn item_rows(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(6))
            .update_raw_el(|raw_el| raw_el.attr("id", "listItems"))
            .items_signal_vec(self.view.rows_signal_vec().map({
                let this = self.clone();
                move |row| this.item_row(row)
            }))
    }

    fn item_row(&self, row: RowModel) -> impl Element + use<> {
        let id = row.id;
        Row::new()
            .s(Width::fill())
            .s(Gap::new().x(10))
            .s(Padding::new().x(10).y(6))
            .s(RoundedCorners::all(8))
            .s(Background::new().color(surface_color()))
            .item(
                Checkbox::new()
                    .label_hidden(row.label.clone())
                    .checked(false)
                    .icon(|checked| {
                        El::new()
                            .s(Font::new().size(18))
                            .child(Text::with_signal(checked.signal().map_bool(|| "☑", || "☐")))
                    })
                    .update_raw_el(move |raw_el| raw_el.attr("data-item-id", &id.to_string()))
                    .on_click({
                        let this = self.clone();
                        move || this.complete(id)
                    }),
            )
            .item(El::new().s(Width::fill()).child(row.label))
    }

    fn clear_button(&self) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        Button::new()
            .s(Padding::new().x(12).y(7))
            .s(RoundedCorners::all(22))
            .s(Align::new().right())
            .s(Borders::all(
                Border::new()
                    .color(color!("rgba(255, 134, 134, 0.45)"))
                    .width(1),
            ))
            .s(Background::new().color_signal(
                hovered
                    .signal()
                    .map_bool(|| color!("rgba(255, 134, 134, 0.12)"), || color!("rgba(255, 134, 134, 0.08)")),
            ))
            .s(Font::new().size(14).weight(FontWeight::Medium).no_wrap())
            .label("Clear list")
            .update_raw_el(|raw_el| raw_el.attr("id", "clearItems"))
            .on_hovered_change(move |is_hovered| hovered.set(is_hovered))
            .on_press({
                let this = self.clone();
                move || this.clear_all()
            })
    }
}
