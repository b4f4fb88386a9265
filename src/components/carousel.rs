use std::rc::Rc;

use yew::prelude::*;

use crate::config::Facility;
use crate::hooks::use_autoplay;
use crate::motion::slides::SlideIndex;

pub enum SlideAction {
    Next,
    Previous,
    GoTo(usize),
}

/// Current slide. `None` when there is nothing to show.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CarouselModel {
    slides: Option<SlideIndex>,
}

impl CarouselModel {
    pub fn new(len: usize) -> Self {
        Self {
            slides: SlideIndex::new(len).ok(),
        }
    }

    pub fn current(&self) -> usize {
        self.slides.map(|s| s.current()).unwrap_or(0)
    }
}

impl Reducible for CarouselModel {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let Some(mut slides) = self.slides else {
            return self;
        };
        match action {
            SlideAction::Next => slides.next(),
            SlideAction::Previous => slides.previous(),
            SlideAction::GoTo(index) => slides.go_to(index),
        }
        Rc::new(Self {
            slides: Some(slides),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct FacilityCarouselProps {
    pub facilities: Vec<Facility>,
    #[prop_or(8000)]
    pub interval_ms: u32,
}

#[function_component(FacilityCarousel)]
pub fn facility_carousel(props: &FacilityCarouselProps) -> Html {
    let len = props.facilities.len();
    let model = use_reducer(|| CarouselModel::new(len));

    let advance = {
        let model = model.dispatcher();
        Callback::from(move |_| model.dispatch(SlideAction::Next))
    };
    let autoplay = use_autoplay(props.interval_ms, len > 1, advance);

    if len == 0 {
        return html! {};
    }

    let onmouseenter = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| autoplay.pointer_enter())
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| autoplay.pointer_leave());

    let on_previous = {
        let model = model.dispatcher();
        Callback::from(move |_: MouseEvent| model.dispatch(SlideAction::Previous))
    };
    let on_next = {
        let model = model.dispatcher();
        Callback::from(move |_: MouseEvent| model.dispatch(SlideAction::Next))
    };

    let current = model.current();
    let track_style = format!("transform: translateX(-{}%);", current * 100);

    html! {
        <div class="carousel" {onmouseenter} {onmouseleave}>
            <div class="carousel-viewport">
                <div class="carousel-track" style={track_style}>
                    { for props.facilities.iter().map(|facility| html! {
                        <figure class="carousel-slide">
                            <img src={facility.image.clone()} alt={facility.caption.clone()} loading="lazy" />
                            <figcaption>{&facility.caption}</figcaption>
                        </figure>
                    }) }
                </div>
            </div>
            {
                if len > 1 {
                    html! {
                        <>
                            <button class="carousel-control prev" onclick={on_previous} aria-label="Anterior">{"‹"}</button>
                            <button class="carousel-control next" onclick={on_next} aria-label="Próximo">{"›"}</button>
                            <div class="carousel-dots">
                                { for (0..len).map(|index| {
                                    let model = model.dispatcher();
                                    html! {
                                        <button
                                            class={classes!("carousel-dot", (index == current).then(|| "active"))}
                                            aria-label={format!("Slide {}", index + 1)}
                                            onclick={Callback::from(move |_: MouseEvent| model.dispatch(SlideAction::GoTo(index)))}
                                        />
                                    }
                                }) }
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
