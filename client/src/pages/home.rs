//! The clinic landing page.

use leptos::prelude::*;

use crate::components::{
    doctors::Doctors, footer::Footer, health_bot::HealthBot, hero::Hero,
    medicine_scheduler::MedicineScheduler, navbar::Navbar, services::Services,
    testimonials::Testimonials,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <main>
                <Hero/>
                <Services/>
                <Doctors/>
                <MedicineScheduler/>
                <Testimonials/>
            </main>
            <Footer/>
            <HealthBot/>
        </div>
    }
}
