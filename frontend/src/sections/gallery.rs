use yew::prelude::*;

use crate::components::revealed::Revealed;
use crate::content::gallery::GALLERY;
use crate::content::section::Section;
use crate::content::stagger::GALLERY_IMAGES;
use crate::hooks::reveal::use_reveal;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let section_ref = use_node_ref();
    let shown = use_reveal(section_ref.clone());

    html! {
        <section id={Section::Gallery.anchor()} ref={section_ref} class="section gallery">
            <style>
                {r#"
                    .gallery {
                        background: linear-gradient(to bottom, #dbeafe, white);
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .gallery-item {
                        overflow: hidden;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }
                    .gallery-frame {
                        aspect-ratio: 4 / 3;
                        overflow: hidden;
                    }
                    .gallery-frame img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 500ms;
                    }
                    .gallery-frame img:hover {
                        transform: scale(1.1);
                    }
                    @media (max-width: 1024px) {
                        .gallery-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    @media (max-width: 640px) {
                        .gallery-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <Revealed shown={shown}>
                    <h2 class="section-title"><span>{"Photo Gallery"}</span></h2>
                    <p class="section-lead">
                        {"Memorable moments from Rohit Sharma's illustrious cricket career across formats and tournaments."}
                    </p>
                </Revealed>

                <div class="gallery-grid">
                    { for GALLERY.iter().enumerate().map(|(i, image)| html! {
                        <Revealed key={i} shown={shown} delay_ms={GALLERY_IMAGES.delay(i)} class="gallery-item">
                            <div class="gallery-frame">
                                <img src={image.src} alt={image.alt} loading="lazy" />
                            </div>
                        </Revealed>
                    }) }
                </div>

                <Revealed shown={shown} delay_ms={800} class="more-link">
                    <a href="#" class="button button-blue">{"View More Photos →"}</a>
                </Revealed>
            </div>
        </section>
    }
}
