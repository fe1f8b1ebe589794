use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::logo::Logo;
use crate::config::{CONTACT_EMAIL, VENUE_LINES};
use crate::content::{copyright, SectionLink, FOOTER_COMMUNITY, FOOTER_SITEMAP, SOCIAL_LINKS};

fn link_group(heading: &str, links: &[SectionLink]) -> Html {
    html! {
        <div class="footer-group">
            <h4>{heading}</h4>
            <ul>
                { for links.iter().map(|(label, id)| html! {
                    <li><AnchorLink href={format!("#{id}")}>{*label}</AnchorLink></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 64px 24px 24px;
                        background: #05070d;
                        border-top: 1px solid rgba(249, 183, 43, 0.2);
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 32px;
                    }
                    .footer-group h4 {
                        color: #F9B72B;
                        margin: 0 0 12px;
                    }
                    .footer-group ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .footer-group li {
                        margin-bottom: 8px;
                    }
                    .site-footer a {
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                    }
                    .site-footer a:hover {
                        color: #F9B72B;
                    }
                    .footer-socials {
                        display: flex;
                        gap: 12px;
                        margin-top: 16px;
                    }
                    .footer-socials a {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 36px;
                        height: 36px;
                        border-radius: 50%;
                        border: 1px solid rgba(249, 183, 43, 0.3);
                    }
                    .footer-bottom {
                        max-width: 1200px;
                        margin: 48px auto 0;
                        padding-top: 16px;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        text-align: center;
                        font-size: 0.85rem;
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div class="footer-brand">
                    <Logo />
                    <p>{"Unravel the mysteries of code in a weekend of enigmatic innovation."}</p>
                    <div class="footer-socials">
                        { for SOCIAL_LINKS.iter().map(|(name, glyph, href)| html! {
                            <a href={*href} aria-label={*name} title={*name}>{*glyph}</a>
                        }) }
                    </div>
                </div>
                { link_group("Sitemap", &FOOTER_SITEMAP) }
                { link_group("Community", &FOOTER_COMMUNITY) }
                <div class="footer-group">
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li><a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a></li>
                        { for VENUE_LINES.iter().map(|line| html! { <li>{*line}</li> }) }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">{copyright(year)}</div>
        </footer>
    }
}
