use stylist::yew::styled_component;
use yew::prelude::*;

const PAW_BLUE: &str = "#5B9BD5";
const SKY_BLUE: &str = "#87CEEB";

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PawSize {
    Small,
    Medium,
    Large,
}

impl PawSize {
    fn pixels(self) -> u32 {
        match self {
            PawSize::Small => 20,
            PawSize::Medium => 36,
            PawSize::Large => 48,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PawPrintProps {
    #[prop_or(PawSize::Medium)]
    pub size: PawSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.2)]
    pub opacity: f64,
}

#[function_component(PawPrint)]
pub fn paw_print(props: &PawPrintProps) -> Html {
    let px = props.size.pixels().to_string();
    html! {
        <svg class={classes!("decoration", props.class.clone())}
            width={px.clone()} height={px}
            viewBox="0 0 24 24" fill="none"
            style={format!("opacity: {};", props.opacity)}>
            <ellipse cx="12" cy="16" rx="4" ry="5" fill={PAW_BLUE} />
            <ellipse cx="8" cy="10" rx="2.5" ry="3" fill={PAW_BLUE} />
            <ellipse cx="12" cy="8" rx="2.5" ry="3" fill={PAW_BLUE} />
            <ellipse cx="16" cy="10" rx="2.5" ry="3" fill={PAW_BLUE} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct OrnamentProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.2)]
    pub opacity: f64,
}

#[function_component(BoneIcon)]
pub fn bone_icon(props: &OrnamentProps) -> Html {
    html! {
        <svg class={classes!("decoration", props.class.clone())}
            width="40" height="20" viewBox="0 0 40 20" fill="none"
            style={format!("opacity: {};", props.opacity)}>
            <path d="M7 10C7 7.5 5.5 6 3.5 6C1.5 6 0 7.5 0 10C0 12.5 1.5 14 3.5 14C5.5 14 7 12.5 7 10ZM33 10C33 7.5 34.5 6 36.5 6C38.5 6 40 7.5 40 10C40 12.5 38.5 14 36.5 14C34.5 14 33 12.5 33 10ZM7 10H33"
                stroke={PAW_BLUE} stroke-width="2" stroke-linecap="round" fill="none" />
            <circle cx="3.5" cy="10" r="2.5" fill={PAW_BLUE} />
            <circle cx="36.5" cy="10" r="2.5" fill={PAW_BLUE} />
        </svg>
    }
}

#[function_component(HeartPaw)]
pub fn heart_paw(props: &OrnamentProps) -> Html {
    html! {
        <svg class={classes!("decoration", props.class.clone())}
            width="44" height="44" viewBox="0 0 45 45" fill="none"
            style={format!("opacity: {};", props.opacity)}>
            <path d="M22.5 38C22.5 38 5 28 5 16C5 10 9 6 13.5 6C17 6 20 8 22.5 11C25 8 28 6 31.5 6C36 6 40 10 40 16C40 28 22.5 38 22.5 38Z"
                fill={SKY_BLUE} />
            <ellipse cx="22.5" cy="22" rx="2.5" ry="3" fill={PAW_BLUE} />
            <ellipse cx="19.5" cy="18" rx="1.5" ry="2" fill={PAW_BLUE} />
            <ellipse cx="22.5" cy="17" rx="1.5" ry="2" fill={PAW_BLUE} />
            <ellipse cx="25.5" cy="18" rx="1.5" ry="2" fill={PAW_BLUE} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct DecorativeCircleProps {
    #[prop_or(100)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.1)]
    pub opacity: f64,
    #[prop_or(false)]
    pub gradient: bool,
}

#[function_component(DecorativeCircle)]
pub fn decorative_circle(props: &DecorativeCircleProps) -> Html {
    let size = props.size;
    let half = f64::from(size) / 2.0;
    let gradient_id = format!("gradient-{}", size);
    let fill = if props.gradient {
        format!("url(#{})", gradient_id)
    } else {
        SKY_BLUE.to_string()
    };

    html! {
        <svg class={classes!("decoration", props.class.clone())}
            width={size.to_string()} height={size.to_string()}
            viewBox={format!("0 0 {} {}", size, size)} fill="none"
            style={format!("opacity: {};", props.opacity)}>
            {
                if props.gradient {
                    html! {
                        <defs>
                            <linearGradient id={gradient_id} x1="0%" y1="0%" x2="100%" y2="100%">
                                <stop offset="0%" stop-color={SKY_BLUE} />
                                <stop offset="100%" stop-color={PAW_BLUE} />
                            </linearGradient>
                        </defs>
                    }
                } else {
                    html! {}
                }
            }
            <circle cx={half.to_string()} cy={half.to_string()} r={half.to_string()} fill={fill} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct PawDividerProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PawDivider)]
pub fn paw_divider(props: &PawDividerProps) -> Html {
    const PAWS: [(f64, &str); 5] = [
        (0.15, "rotate-12"),
        (0.2, "-rotate-12"),
        (0.25, ""),
        (0.2, "rotate-12"),
        (0.15, "-rotate-12"),
    ];
    html! {
        <div class={classes!("paw-divider", props.class.clone())}>
            { for PAWS.iter().map(|(opacity, tilt)| html! {
                <PawPrint size={PawSize::Small} opacity={*opacity} class={classes!(*tilt)} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingPawProps {
    #[prop_or(PawSize::Small)]
    pub size: PawSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.15)]
    pub opacity: f64,
    /// Seconds before the float loop starts, so neighbours drift out of phase.
    #[prop_or(0.0)]
    pub delay: f64,
}

#[styled_component(FloatingPaw)]
pub fn floating_paw(props: &FloatingPawProps) -> Html {
    let float = css!(
        r#"
            animation: float 3.5s ease-in-out infinite;
            animation-delay: ${delay}s;
        "#,
        delay = props.delay
    );
    html! {
        <div class={classes!(float, props.class.clone())}>
            <PawPrint size={props.size} opacity={props.opacity} />
        </div>
    }
}
