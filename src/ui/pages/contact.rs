//! Contact page component
//!
//! The single page of this site: a contact form with client-side presence
//! validation, contact-information cards, and a static store map. The form
//! never leaves the browser; submission only updates local state with a
//! canned status line. The headline and form slide in the first time they
//! scroll into view.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::contact::{ContactField, ContactForm};
use crate::ui::common::{ErrorMessage, FormField, SuccessMessage, TextAreaField};
use crate::ui::contact_info::ContactInfo;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::map::ContactMap;
use crate::ui::reveal::ScrollReveal;

/// Contact page component
#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    // One derived value signal and one update callback per field, all
    // routed through the closed ContactField enum.
    let field_value = move |field: ContactField| {
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    };
    let update_field = move |field: ContactField| {
        Callback::new(move |value: String| form.update(|f| f.set(field, value)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            f.submit();
        });
    };

    let error = Signal::derive(move || {
        form.with(|f| {
            f.status()
                .is_error()
                .then(|| f.status().message().to_string())
        })
    });
    let sent = Signal::derive(move || {
        form.with(|f| {
            f.status()
                .is_sent()
                .then(|| f.status().message().to_string())
        })
    });

    view! {
        <Title text="QuickLink - Contact Us" />
        <Meta name="description" content="Get in touch with the QuickLink team about products, orders, or services." />

        <div class="min-h-screen bg-gray-50">
            <Header />

            <main class="pt-16">
                <ScrollReveal class="w-full flex flex-col items-center px-4 py-6 mb-5">
                    <h1 class="text-3xl font-medium mb-6">"Contact Us"</h1>
                    <p class="mb-5 font-normal text-gray-700 max-w-2xl text-center">
                        "We're here to help with any questions about our products, orders, or services. Get in touch with our friendly team."
                    </p>

                    // Status line for the last submission attempt
                    <div class="mb-4">
                        <SuccessMessage message=sent />
                        <ErrorMessage error=error />
                    </div>

                    <section id="contact-form" class="w-full max-w-6xl flex flex-col md:flex-row gap-6">
                        // Left: contact information
                        <div class="md:w-1/2 w-full bg-gray-100 rounded-lg p-4">
                            <ContactInfo />
                        </div>

                        // Right: the form
                        <div class="md:w-1/2 w-full bg-white shadow-lg p-6 rounded-lg">
                            <form on:submit=on_submit class="flex flex-col gap-4">
                                <FormField
                                    id="full-name"
                                    label="Full Name"
                                    placeholder="Enter your full name"
                                    required=true
                                    value=field_value(ContactField::FullName)
                                    on_input=update_field(ContactField::FullName)
                                />
                                <FormField
                                    id="email"
                                    label="Email"
                                    input_type="email"
                                    placeholder="Enter your email"
                                    required=true
                                    value=field_value(ContactField::Email)
                                    on_input=update_field(ContactField::Email)
                                />
                                <FormField
                                    id="subject"
                                    label="Subject"
                                    placeholder="Subject"
                                    required=true
                                    value=field_value(ContactField::Subject)
                                    on_input=update_field(ContactField::Subject)
                                />
                                <TextAreaField
                                    id="message"
                                    label="Message"
                                    placeholder="Enter your message"
                                    rows=5
                                    required=true
                                    value=field_value(ContactField::Message)
                                    on_input=update_field(ContactField::Message)
                                />

                                <button
                                    type="submit"
                                    class="bg-blue-600 text-white py-2 px-4 rounded hover:bg-blue-700 font-medium transition-colors"
                                >
                                    "Send Message"
                                </button>
                            </form>
                        </div>
                    </section>
                </ScrollReveal>

                // Store map
                <section id="map" class="max-w-6xl mx-auto px-4 pb-12">
                    <h2 class="text-2xl font-normal mb-4">"We Are Here ❤️"</h2>
                    <ContactMap />
                </section>
            </main>

            <Footer />

            <ContactStyles />
        </div>
    }
}

/// CSS for the one-shot slide-in reveal
#[component]
fn ContactStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .scroll-reveal {
                opacity: 0;
                transform: translateX(-50px);
                transition: opacity 0.5s ease-out, transform 0.5s ease-out;
            }

            .scroll-reveal.visible {
                opacity: 1;
                transform: translateX(0);
            }
            "#
        </style>
    }
}
