//! Home dashboard page.
//!
//! Renders every [`Section`] in [`PAGE_SECTIONS`] order. Card content does not
//! depend on the active tab; only the nav bar reads it.

use super::cards::{NotificationCard, ProjectCard, StatusCard, TaskCard, TrainingCard};
use super::sections::{Section, PAGE_SECTIONS};
use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::layout::nav::NavTabs;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use contracts::dashboard::{DashboardContent, HERO_IMAGE_ALT, HERO_IMAGE_PATH};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let content = DashboardContent::home();

    view! {
        <div class="dashboard">
            {PAGE_SECTIONS
                .into_iter()
                .map(|section| render_section(section, &content))
                .collect_view()}
        </div>
    }
}

fn render_section(section: Section, content: &DashboardContent) -> AnyView {
    match section {
        Section::Header => view! { <Header /> }.into_any(),
        Section::Nav => view! { <NavTabs /> }.into_any(),
        Section::Hero => view! {
            <section data-zone=section.zone() class="hero">
                <img src=HERO_IMAGE_PATH alt=HERO_IMAGE_ALT width="1000" height="400" class="hero__image" />
            </section>
        }
        .into_any(),
        Section::Statuses => {
            let statuses = content.statuses.clone();
            view! {
                <section data-zone=section.zone() class="status-row">
                    {statuses
                        .into_iter()
                        .enumerate()
                        .map(|(i, metric)| view! { <StatusCard metric=metric delay_ms=stagger_delay(i) /> })
                        .collect_view()}
                </section>
            }
            .into_any()
        }
        Section::NotificationsAndProjects => {
            let notifications = content.notifications.clone();
            let projects = content.projects.clone();
            view! {
                <section data-zone=section.zone() class="panel-grid">
                    <CardAnimated class="panel" delay_ms=stagger_delay(0)>
                        <h2 class="panel__heading">"NOTIFICATIONS"</h2>
                        {notifications
                            .into_iter()
                            .map(|item| view! { <NotificationCard item=item /> })
                            .collect_view()}
                    </CardAnimated>
                    <CardAnimated class="panel" delay_ms=stagger_delay(1)>
                        <h2 class="panel__heading">"PROJECTS"</h2>
                        {projects
                            .into_iter()
                            .map(|item| view! { <ProjectCard item=item /> })
                            .collect_view()}
                    </CardAnimated>
                </section>
            }
            .into_any()
        }
        Section::TasksAndTrainings => {
            let tasks = content.tasks.clone();
            let trainings = content.trainings.clone();
            view! {
                <section data-zone=section.zone() class="panel-grid">
                    <CardAnimated class="panel" delay_ms=stagger_delay(2)>
                        <div class="panel__heading-row">
                            <h2 class="panel__heading">"ASSIGNED TASKS"</h2>
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| log::debug!("assign task requested")
                            >
                                "ASSIGN TASK"
                            </Button>
                        </div>
                        {tasks
                            .into_iter()
                            .map(|item| view! { <TaskCard item=item /> })
                            .collect_view()}
                    </CardAnimated>
                    <CardAnimated class="panel" delay_ms=stagger_delay(3)>
                        <h2 class="panel__heading">"TRAININGS"</h2>
                        {trainings
                            .into_iter()
                            .map(|item| view! { <TrainingCard item=item /> })
                            .collect_view()}
                    </CardAnimated>
                </section>
            }
            .into_any()
        }
        Section::Footer => view! { <Footer /> }.into_any(),
    }
}
