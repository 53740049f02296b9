//! Page header
//!
//! Fixed top bar with the QuickLink branding and section navigation.
//! Mounted with no parameters.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Site header with mobile menu support
#[component]
pub fn Header() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur-md border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="/" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-gray-900">"QuickLink"</span>
                    </a>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center gap-4">
                        <a href="#contact-form" class="text-sm font-medium text-gray-600 hover:text-gray-900 transition-colors">
                            "Get in Touch"
                        </a>
                        <a href="#map" class="text-sm font-medium text-gray-600 hover:text-gray-900 transition-colors">
                            "Find Us"
                        </a>
                    </nav>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-200 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! {
                                    <Icon name=icons::X class="w-6 h-6 text-gray-900" />
                                }.into_any()
                            } else {
                                view! {
                                    <Icon name=icons::MENU class="w-6 h-6 text-gray-900" />
                                }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="py-4 flex flex-col gap-2 border-t border-gray-200/50">
                        <a
                            href="#contact-form"
                            class="block px-4 py-2 text-sm font-medium text-gray-600 hover:text-gray-900 hover:bg-gray-100 rounded-lg transition-colors"
                            on:click=move |_| set_mobile_menu_open.set(false)
                        >
                            "Get in Touch"
                        </a>
                        <a
                            href="#map"
                            class="block px-4 py-2 text-sm font-medium text-gray-600 hover:text-gray-900 hover:bg-gray-100 rounded-lg transition-colors"
                            on:click=move |_| set_mobile_menu_open.set(false)
                        >
                            "Find Us"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// QuickLink logo mark
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-blue-600 to-indigo-600 rounded-xl
                    flex items-center justify-center shadow-lg">
            <svg class="w-6 h-6 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M16 11V7a4 4 0 00-8 0v4M5 9h14l1 12H4L5 9z" />
            </svg>
        </div>
    }
}
