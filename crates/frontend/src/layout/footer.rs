use crate::layout::header::LOGO_URL;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <div class="footer__logo">
                        <img src=LOGO_URL alt="Art Brasil" />
                    </div>
                    <div class="footer__titles">
                        <span class="footer__title">
                            "ART"<span class="footer__title-accent">"BRASIL"</span>
                        </span>
                        <span class="footer__tagline">"O PODER QUE VEM DA ARTE"</span>
                    </div>
                </div>

                <p class="footer__blurb">
                    "Artesanato religioso com acabamento premium e entrega garantida para todo o Brasil."
                </p>

                <div class="footer__contact">
                    <span class="footer__phone">
                        <span class="footer__phone-dot"></span>
                        "91 98645-3823"
                    </span>
                    <span class="footer__sep">"•"</span>
                    <span>"Belém-PA"</span>
                </div>

                <div class="footer__copyright">
                    {format!("© {year} Art Brasil - Todos os direitos reservados.")}
                </div>
            </div>
        </footer>
    }
}
