//! A card carousel bound to a console "surface": runs one layout pass,
//! prints the cells it would show, and replays a tap and a long press.

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::SlotMap;

use cardlane::*;

#[derive(Default)]
struct CardCell {
    label: String,
    corner_radius: f32,
    gradient: bool,
}

impl GridCell for CardCell {
    type Data = String;
    const REUSE_IDENT: &'static str = "demo.card";

    fn prepare_for_reuse(&mut self) {
        self.label.clear();
    }

    fn bind(&mut self, data: &String) {
        self.label = data.clone();
    }

    fn apply_chrome(&mut self, chrome: &CellChrome) {
        self.corner_radius = chrome.corner_radius;
        self.gradient = chrome.gradient.is_some();
    }
}

/// A surface that "renders" by printing. It owns the slot table and walks
/// the renderer's data-source contract the way a real grid widget would.
struct ConsoleSurface {
    registered: Vec<&'static str>,
    content_size: Size,
    slots: Rc<RefCell<SlotMap<CellSlot, usize>>>,
}

impl ConsoleSurface {
    fn new() -> Self {
        ConsoleSurface {
            registered: Vec::new(),
            content_size: Size::ZERO,
            slots: Rc::default(),
        }
    }
}

impl RenderSurface for ConsoleSurface {
    type Cell = CardCell;

    fn register_cell(&mut self, ident: &'static str) -> Result<(), BindError> {
        if self.registered.contains(&ident) {
            return Err(BindError::CellAlreadyRegistered { ident });
        }
        self.registered.push(ident);
        Ok(())
    }

    fn set_axis(&mut self, axis: Axis) {
        log::debug!("surface axis set to {axis:?}");
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        log::debug!("surface scrolling enabled: {enabled}");
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn scroll_offset(&self) -> Vec2 {
        Vec2::default()
    }

    fn index_of_cell(&self, slot: CellSlot) -> Option<usize> {
        self.slots.borrow().get(slot).copied()
    }

    fn pin_axis_extent(&mut self, axis: Axis, extent: f32) {
        log::info!("pinning {axis:?} extent to {extent}");
    }

    fn request_refresh(&mut self) {
        log::info!("refresh requested");
    }
}

/// One layout pass: query counts and metrics, materialize every cell.
fn layout_pass(
    renderer: &mut SectionRenderer<CardCell, ConsoleSurface>,
    slots: &Rc<RefCell<SlotMap<CellSlot, usize>>>,
) -> anyhow::Result<Size> {
    let count = renderer.item_count();
    let cell_size = renderer.preferred_size(0);
    let spacing = renderer.inter_item_spacing();
    let insets = renderer.section_insets();

    println!(
        "laying out {count} cells of {}x{} (spacing {spacing}, insets l={} r={})",
        cell_size.width, cell_size.height, insets.left, insets.right,
    );

    let mut main_extent = insets.left;
    for index in 0..count {
        let slot = slots.borrow_mut().insert(index);
        let cell = renderer.cell_for_item(index)?;
        println!(
            "  [{index}] {:12} radius={} gradient={} ({slot:?})",
            cell.label, cell.corner_radius, cell.gradient,
        );
        renderer.recycle(cell)?;
        main_extent += cell_size.width + if index + 1 < count { spacing } else { 0.0 };
    }
    main_extent += insets.right;

    let content = Size::new(main_extent, cell_size.height);
    renderer.layout_pass_complete(content)?;
    Ok(content)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let section = Section::shared(0);
    section.borrow_mut().set_items(
        ["Mobility", "Strength", "Balance", "Breathing"]
            .map(String::from)
            .to_vec(),
    );
    section.borrow_mut().set_appearance(
        SectionAppearance::new()
            .title("Today's classes")
            .detail_title("See all")
            .preferred_cell_size(140.0, 90.0)
            .item_spacing(20.0)
            .cell_corner_radius(8.0)
            .gradient(Gradient::from_parts(
                &[Color::from_hex("#30cfd0"), Color::from_hex("#330867")],
                &[0.0, 1.0],
            )),
    );

    let surface = ConsoleSurface::new();
    let slots = surface.slots.clone();

    let mut renderer = GridBuilder::new()
        .axis(Axis::Horizontal)
        .register_section(section.clone(), surface, CardCell::default)?;
    renderer
        .on_tap(|ident, index, item| println!("tap: section {ident}, cell {index} ({item})"))
        .on_long_press(|ident, index, item| {
            println!("long press: section {ident}, cell {index} ({item})")
        })
        .on_size_changed(|size, ident| {
            println!("section {ident} content size: {}x{}", size.width, size.height)
        });

    let mut header = SectionHeader::new(section.borrow().ident());
    header.on_detail_tap(|ident| println!("detail tapped on section {ident}"));
    header.set_appearance(
        section.borrow().appearance().clone(),
        SectionHeader::default_padding(),
    );
    println!("== {} ==", header.title());

    layout_pass(&mut renderer, &slots)?;

    // user interactions, as the surface would report them
    renderer.did_select(1)?;
    let pressed = slots.borrow().keys().nth(2);
    if let Some(slot) = pressed {
        renderer.long_pressed(slot)?;
    }
    header.detail_tapped();

    Ok(())
}
