//! Service card grid.

use super::target::RenderTarget;
use crate::config::Service;
use crate::dom::{Element, Node};

/// Rebuild the services grid from config order. An empty list clears the grid.
pub(super) fn apply<T: RenderTarget>(target: &mut T, services: &[Service]) {
    let cards = services
        .iter()
        .enumerate()
        .map(|(index, service)| card(index, service))
        .collect();
    target.rebuild("servicesGrid", cards);
}

/// Entrance animations are staggered a tenth of a second per card.
fn card(index: usize, service: &Service) -> Node {
    let mut card = Element::new("div");
    card.set_attr("class", "service-card");
    let delay = index as f64 * 0.1;
    card.set_attr("style", format!("animation-delay: {delay:.1}s;"));

    let mut icon = Element::new("div");
    icon.set_attr("class", "service-icon");
    let mut img = Element::new("img");
    img.set_attr("src", &service.icon);
    img.set_attr("alt", format!("{} icon", service.title));
    icon.push_elem(img);
    card.push_elem(icon);

    let mut heading = Element::new("h3");
    heading.push_text(&service.title);
    card.push_elem(heading);

    let mut body = Element::new("p");
    body.push_text(&service.description);
    card.push_elem(body);

    Node::Element(Box::new(card))
}
