use yew::prelude::*;

use crate::theme::TailwindConfig;

const PAGE_CSS: &str = r#"
    body {
        margin: 0;
        font-family: system-ui, sans-serif;
        background: var(--color-darkmode);
        color: var(--color-muted);
    }
    #navbar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 20;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem 2rem;
        transition: background-color 0.3s ease, backdrop-filter 0.3s ease;
    }
    #navbar a {
        color: inherit;
        text-decoration: none;
        margin-left: 1.5rem;
    }
    .bg-white\/15 {
        background-color: rgba(255, 255, 255, 0.15);
    }
    .backdrop-blur-lg {
        backdrop-filter: blur(16px);
    }
    #mobile-menu-btn {
        display: none;
        background: none;
        border: none;
        color: inherit;
        font-size: 1.5rem;
    }
    #mobile-menu {
        position: fixed;
        inset: 0;
        z-index: 30;
        background: rgba(0, 5, 16, 0.6);
        transition: transform 0.3s ease;
    }
    .-translate-x-full {
        transform: translateX(-100%);
    }
    .mobile-menu-panel {
        width: 16rem;
        height: 100%;
        padding: 2rem;
        background: var(--color-deep-slate);
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .mobile-menu-link {
        color: inherit;
        text-decoration: none;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        text-align: center;
    }
    .hero-cta {
        color: var(--color-darkmode);
        background: var(--color-primary);
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        text-decoration: none;
    }
    .feature-block {
        max-width: 75rem;
        margin: 0 auto;
        padding: 6rem 2rem;
    }
    .faq-section {
        max-width: 50rem;
        margin: 0 auto;
        padding: 6rem 2rem;
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        background: none;
        border: none;
        border-bottom: 1px solid var(--color-dark-border);
        color: inherit;
        padding: 1rem 0;
        font-size: 1.1rem;
        cursor: pointer;
    }
    .faq-answer {
        max-height: 0;
        overflow: hidden;
        transition: max-height 0.3s ease, padding 0.3s ease;
    }
    .faq-icon {
        transition: transform 0.3s ease;
    }
    @media (max-width: 768px) {
        .nav-links {
            display: none;
        }
        #mobile-menu-btn {
            display: block;
        }
    }
"#;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

/// Static markup only. The accordion effect owns the open/closed styling.
#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class="faq-item">
            <button class="faq-question" type="button">
                <span>{&props.question}</span>
                <span class="faq-icon">{"▾"}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let root_vars = format!(":root {{\n{}}}", TailwindConfig::default().css_variables());

    html! {
        <div class="landing-page" id="top">
            <style>{root_vars}</style>
            <style>{PAGE_CSS}</style>

            <nav id="navbar">
                <a href="#top" class="nav-logo">{"Northwind"}</a>
                <div class="nav-links">
                    <a href="#features">{"Features"}</a>
                    <a href="#how-it-works">{"How it works"}</a>
                    <a href="#faq">{"FAQ"}</a>
                    <a href="#!">{"Soon"}</a>
                </div>
                <button id="mobile-menu-btn" type="button" aria-label="Open menu">{"☰"}</button>
            </nav>

            <div id="mobile-menu" class="-translate-x-full">
                <div class="mobile-menu-panel">
                    <button id="mobile-menu-close" type="button" aria-label="Close menu">{"✕"}</button>
                    <a href="#features" class="mobile-menu-link">{"Features"}</a>
                    <a href="#how-it-works" class="mobile-menu-link">{"How it works"}</a>
                    <a href="#faq" class="mobile-menu-link">{"FAQ"}</a>
                </div>
            </div>

            <header class="hero">
                <h1 data-animate="fade-down">{"Build, ship and grow in one place"}</h1>
                <p data-animate="fade-in" data-delay="200">
                    {"Plan the work, track progress and keep everyone in the loop."}
                </p>
                <a href="#features" class="hero-cta" data-animate="fade-up" data-delay="400">
                    {"See how"}
                </a>
            </header>

            <section id="features" class="feature-block">
                <h2 data-animate="fade-up">{"Everything in one view"}</h2>
                <p data-animate="fade-up" data-delay="100">
                    {"Projects, tasks and notes sit side by side, so nothing gets lost between tools."}
                </p>
                <p data-animate="fade-up" data-delay="200">
                    {"Weekly summaries keep the whole team up to date."}
                </p>
            </section>

            <section id="how-it-works" class="feature-block">
                <h2 data-animate="slide">{"How it works"}</h2>
                <p data-animate="fade-in" data-delay="150">
                    {"Create a workspace, invite your team and start with one of the templates."}
                </p>
            </section>

            <section id="faq" class="faq-section">
                <h2 data-animate="fade-up">{"Frequently asked questions"}</h2>
                <FaqItem question="Is there a free plan?">
                    <p>{"Yes. Small teams can use the core features at no cost."}</p>
                </FaqItem>
                <FaqItem question="Can I import existing data?">
                    <p>{"Spreadsheets and CSV exports can be imported from the settings page."}</p>
                </FaqItem>
                <FaqItem question="Can I try it first?">
                    <p>{"Yes. Jump back to the "}<a href="#features">{"features"}</a>{" to see what is included."}</p>
                </FaqItem>
            </section>
        </div>
    }
}
