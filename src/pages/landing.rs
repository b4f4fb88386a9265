use chrono::Datelike;
use yew::prelude::*;

use crate::components::carousel::FacilityCarousel;
use crate::components::counter::AnimatedCounter;
use crate::components::decorations::{
    BoneIcon, DecorativeCircle, FloatingPaw, HeartPaw, PawDivider, PawPrint, PawSize,
};
use crate::components::floating_contact::FloatingContact;
use crate::components::header::{scroll_callback, SECTIONS};
use crate::components::reveal::{Reveal, RevealKind, StaggerGroup};
use crate::config;

const SERVICE_ICONS: [&str; 6] = ["🩺", "💉", "🏥", "🚑", "📋", "🐾"];

#[function_component(VeterinaryLanding)]
pub fn veterinary_landing() -> Html {
    let site = config::site();
    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <section id="home" class="hero">
                <FloatingPaw class={classes!("hero-paw", "paw-1")} size={PawSize::Large} delay={0.0} />
                <FloatingPaw class={classes!("hero-paw", "paw-2")} delay={1.0} />
                <FloatingPaw class={classes!("hero-paw", "paw-3")} size={PawSize::Medium} delay={2.0} />
                <DecorativeCircle class={classes!("hero-circle")} size={300} gradient={true} />

                <div class="hero-content">
                    <Reveal kind={RevealKind::SlideUp} class={classes!("hero-copy")}>
                        <h1>
                            {"Cuidado com "}
                            <span class="highlight">{"amor"}</span>
                            {" para quem você ama"}
                        </h1>
                        <p class="hero-tagline">{&site.tagline}</p>
                        <div class="hero-buttons">
                            <button class="button-accent" onclick={scroll_callback("contact")}>
                                {"Agendar Consulta"}
                            </button>
                            <button class="button-ghost" onclick={scroll_callback("services")}>
                                {"Nossos Serviços"}
                            </button>
                        </div>
                    </Reveal>
                    <Reveal kind={RevealKind::Zoom} class={classes!("hero-image")}>
                        <img src="/assets/hero-pets.jpg" alt="Cão e gato felizes" />
                        <HeartPaw class={classes!("hero-heart")} opacity={0.9} />
                    </Reveal>
                </div>

                <svg class="hero-wave" viewBox="0 0 1440 120" preserveAspectRatio="none">
                    <path d="M0,64 C360,120 1080,0 1440,64 L1440,120 L0,120 Z" fill="#ffffff" />
                </svg>
            </section>

            <PawDivider />

            <section id="about" class="about">
                <div class="about-grid">
                    <Reveal kind={RevealKind::SlideLeft} class={classes!("about-images")}>
                        <img src="/assets/about-vet.jpg" alt="Veterinária examinando um cão" />
                        <img class="about-image-secondary" src="/assets/about-cat.jpg" alt="Gato em consulta" />
                        <BoneIcon class={classes!("about-bone")} />
                    </Reveal>
                    <Reveal kind={RevealKind::SlideRight} class={classes!("about-copy")}>
                        <h2>{"Sobre Nós"}</h2>
                        <p>
                            {format!(
                                "A {} nasceu do amor pelos animais e do compromisso com a saúde e o bem-estar de cada paciente.",
                                site.clinic_name
                            )}
                        </p>
                        <ul class="highlights">
                            { for site.highlights.iter().map(|highlight| html! {
                                <li>
                                    <PawPrint size={PawSize::Small} opacity={0.8} />
                                    <span>{highlight}</span>
                                </li>
                            }) }
                        </ul>
                    </Reveal>
                </div>
            </section>

            <section id="services" class="services">
                <Reveal class={classes!("section-heading")}>
                    <h2>{"Nossos Serviços"}</h2>
                    <p>{"Tudo o que seu pet precisa em um só lugar."}</p>
                </Reveal>
                <StaggerGroup delay_ms={site.stagger_delay_ms} class={classes!("services-grid")}>
                    { for site.services.iter().enumerate().map(|(i, service)| html! {
                        <div class="service-card">
                            <span class="service-icon">{SERVICE_ICONS[i % SERVICE_ICONS.len()]}</span>
                            <h3>{&service.title}</h3>
                            <p>{&service.description}</p>
                        </div>
                    }) }
                </StaggerGroup>
            </section>

            <section class="stats">
                { for site.stats.iter().map(|stat| html! {
                    <AnimatedCounter
                        end={stat.value}
                        duration_ms={site.counter_duration_ms}
                        suffix={stat.suffix.clone()}
                        label={stat.label.clone()}
                    />
                }) }
            </section>

            <section class="facilities">
                <Reveal class={classes!("section-heading")}>
                    <h2>{"Nossa Estrutura"}</h2>
                    <p>{"Um espaço pensado para o conforto e a segurança do seu pet."}</p>
                </Reveal>
                <FacilityCarousel facilities={site.facilities.clone()} interval_ms={site.carousel.interval_ms} />
                <Reveal kind={RevealKind::SlideUp} class={classes!("facilities-cta")}>
                    <p>{"Venha conhecer nossa clínica pessoalmente."}</p>
                    <button class="button-accent" onclick={scroll_callback("contact")}>{"Agende uma Visita"}</button>
                </Reveal>
            </section>

            <section class="cta">
                <HeartPaw class={classes!("cta-heart")} opacity={0.3} />
                <DecorativeCircle class={classes!("cta-circle")} size={200} opacity={0.15} />
                <Reveal kind={RevealKind::Zoom} class={classes!("cta-content")}>
                    <h2>{"Seu pet merece o melhor cuidado"}</h2>
                    <p>{"Agende agora uma consulta e conheça nossa equipe."}</p>
                    <button class="button-accent" onclick={scroll_callback("contact")}>{"Agendar Consulta"}</button>
                </Reveal>
            </section>

            <footer id="contact" class="site-footer">
                <div class="footer-grid">
                    <div class="footer-column">
                        <h3>{&site.clinic_name}</h3>
                        <p>{&site.footer_blurb}</p>
                    </div>
                    <div class="footer-column">
                        <h4>{"Links Rápidos"}</h4>
                        { for SECTIONS.iter().map(|(id, label)| html! {
                            <button class="footer-link" onclick={scroll_callback(*id)}>{*label}</button>
                        }) }
                    </div>
                    <div class="footer-column">
                        <h4>{"Serviços"}</h4>
                        <ul>
                            { for site.services.iter().map(|service| html! { <li>{&service.title}</li> }) }
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4>{"Contato"}</h4>
                        { for site.contact.address.iter().map(|line| html! { <p>{line}</p> }) }
                        <p>{&site.contact.phone}</p>
                        <p>{&site.contact.email}</p>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. {}", year, site.clinic_name, site.legal)}</p>
                </div>
            </footer>

            <FloatingContact />
            <style>{LANDING_STYLES}</style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <PawPrint size={PawSize::Large} opacity={0.6} />
            <h1>{"Página não encontrada"}</h1>
            <a href="/" class="button-accent">{"Voltar ao início"}</a>
            <style>{LANDING_STYLES}</style>
        </div>
    }
}

const LANDING_STYLES: &str = r#"
body {
    margin: 0;
    font-family: 'Nunito', 'Segoe UI', sans-serif;
    color: #1e293b;
    background: #ffffff;
}

.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 40;
    padding: 1rem 0;
    transition: background 0.3s ease, box-shadow 0.3s ease;
}

.site-header.scrolled {
    background: rgba(255, 255, 255, 0.95);
    box-shadow: 0 2px 12px rgba(15, 23, 42, 0.08);
}

.header-content {
    max-width: 1200px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 1.5rem;
}

.header-logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 800;
    font-size: 1.25rem;
}

.logo-heart {
    color: #5B9BD5;
}

.header-nav, .header-actions {
    display: flex;
    gap: 1rem;
}

.nav-link, .mobile-link, .footer-link {
    background: none;
    border: none;
    cursor: pointer;
    font: inherit;
    color: inherit;
}

.button-accent, .button-ghost {
    border-radius: 999px;
    padding: 0.75rem 1.5rem;
    font: inherit;
    font-weight: 700;
    cursor: pointer;
    text-decoration: none;
}

.button-accent {
    background: #5B9BD5;
    color: white;
    border: none;
}

.button-ghost {
    background: transparent;
    color: #5B9BD5;
    border: 2px solid #5B9BD5;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}

.burger-menu span {
    width: 24px;
    height: 2px;
    background: #1e293b;
}

.mobile-menu {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1rem 1.5rem;
    background: white;
}

.hero {
    position: relative;
    overflow: hidden;
    padding: 8rem 1.5rem 6rem;
    background: linear-gradient(135deg, #e0f2fe 0%, #ffffff 100%);
}

.hero-content, .about-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}

.hero h1 {
    font-size: 3rem;
    line-height: 1.1;
}

.highlight {
    color: #5B9BD5;
}

.hero-buttons {
    display: flex;
    gap: 1rem;
}

.hero-image, .about-images {
    position: relative;
}

.hero-image img, .about-images img {
    width: 100%;
    border-radius: 24px;
}

.hero-paw, .hero-circle, .hero-heart, .about-bone, .cta-heart, .cta-circle {
    position: absolute;
    pointer-events: none;
}

.paw-1 { top: 15%; left: 5%; }
.paw-2 { top: 60%; left: 45%; }
.paw-3 { top: 25%; right: 8%; }
.hero-circle { bottom: -80px; right: -80px; }
.hero-heart { bottom: -20px; left: -20px; }
.about-bone { top: -20px; right: 10%; }
.cta-heart { top: 20%; left: 10%; }
.cta-circle { bottom: -60px; right: 5%; }

.hero-wave {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    height: 80px;
}

.paw-divider {
    display: flex;
    justify-content: center;
    gap: 2rem;
    padding: 2rem 0;
}

.rotate-12 { transform: rotate(12deg); }
.-rotate-12 { transform: rotate(-12deg); }

.about, .services, .facilities {
    padding: 5rem 1.5rem;
}

.about-image-secondary {
    position: absolute;
    width: 45% !important;
    bottom: -2rem;
    right: -2rem;
    border: 6px solid white;
}

.highlights {
    list-style: none;
    padding: 0;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 0.75rem;
}

.highlights li {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.section-heading {
    text-align: center;
    margin-bottom: 3rem;
}

.services-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}

.service-card {
    height: 100%;
    padding: 2rem;
    border-radius: 20px;
    background: #f8fafc;
    box-shadow: 0 4px 16px rgba(15, 23, 42, 0.06);
}

.service-icon {
    font-size: 2rem;
}

.stats {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
    padding: 4rem 1.5rem;
    background: #5B9BD5;
    color: white;
    text-align: center;
}

.stat {
    display: flex;
    flex-direction: column;
}

.stat-value {
    font-size: 2.5rem;
    font-weight: 800;
}

.carousel {
    position: relative;
    max-width: 900px;
    margin: 0 auto;
}

.carousel-viewport {
    overflow: hidden;
    border-radius: 24px;
}

.carousel-track {
    display: flex;
    transition: transform 0.6s ease;
}

.carousel-slide {
    flex: 0 0 100%;
    margin: 0;
}

.carousel-slide img {
    width: 100%;
    height: 480px;
    object-fit: cover;
}

.carousel-slide figcaption {
    padding: 1rem;
    text-align: center;
}

.carousel-control {
    position: absolute;
    top: 45%;
    width: 44px;
    height: 44px;
    border-radius: 50%;
    border: none;
    background: rgba(255, 255, 255, 0.9);
    font-size: 1.5rem;
    cursor: pointer;
}

.carousel-control.prev { left: 1rem; }
.carousel-control.next { right: 1rem; }

.carousel-dots {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
}

.carousel-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    border: none;
    background: #cbd5e1;
    cursor: pointer;
}

.carousel-dot.active {
    background: #5B9BD5;
}

.facilities-cta {
    text-align: center;
    margin-top: 2rem;
}

.cta {
    position: relative;
    overflow: hidden;
    padding: 5rem 1.5rem;
    text-align: center;
    background: linear-gradient(135deg, #5B9BD5 0%, #87CEEB 100%);
    color: white;
}

.site-footer {
    padding: 4rem 1.5rem 2rem;
    background: #0f172a;
    color: #cbd5e1;
}

.footer-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}

.footer-column {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
}

.footer-bottom {
    text-align: center;
    margin-top: 3rem;
    font-size: 0.85rem;
}

.not-found {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-height: 80vh;
    gap: 1rem;
}

/* Hidden until the reveal hooks add .is-visible */
.scroll-fade-in, .scroll-slide-up, .scroll-slide-left, .scroll-slide-right, .scroll-zoom, .stagger-item {
    opacity: 0;
    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
}

.scroll-slide-up, .stagger-item { transform: translateY(40px); }
.scroll-slide-left { transform: translateX(-60px); }
.scroll-slide-right { transform: translateX(60px); }
.scroll-zoom { transform: scale(0.9); }

.is-visible {
    opacity: 1;
    transform: none;
}

@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-12px); }
}

@media (max-width: 768px) {
    .header-nav, .header-actions {
        display: none;
    }

    .burger-menu {
        display: flex;
    }

    .hero-content, .about-grid, .highlights {
        grid-template-columns: 1fr;
    }

    .services-grid, .stats, .footer-grid {
        grid-template-columns: 1fr 1fr;
    }

    .hero h1 {
        font-size: 2.25rem;
    }
}

@media (prefers-reduced-motion: reduce) {
    .scroll-fade-in, .scroll-slide-up, .scroll-slide-left, .scroll-slide-right, .scroll-zoom, .stagger-item {
        transition: none;
    }
}
"#;
