//! Skill map widget: categorized skill levels from the content data.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn SkillMapPanel() -> impl IntoView {
    view! {
        <div class="skill-map">
            {content::SKILLS
                .iter()
                .map(|group| {
                    view! {
                        <div class="skill-map__group">
                            <h4 class="skill-map__category">{group.category}</h4>
                            {group
                                .skills
                                .iter()
                                .map(|&(name, level)| {
                                    view! {
                                        <div class="skill-map__row">
                                            <span class="skill-map__name">{name}</span>
                                            <div class="skill-map__track">
                                                <div
                                                    class="skill-map__fill"
                                                    style:width=format!("{level}%")
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
