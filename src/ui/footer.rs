//! Page footer, mounted with no parameters.

use leptos::prelude::*;

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-gray-200 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-8">
                    // Brand
                    <div>
                        <span class="text-xl font-bold text-gray-900">"QuickLink"</span>
                        <p class="mt-4 text-sm text-gray-600 max-w-md">
                            "Everyday essentials, delivered quickly. We're a small team and we read every message."
                        </p>
                    </div>

                    // Page links
                    <div>
                        <h4 class="font-semibold text-gray-900 mb-4">"Contact"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="#contact-form" class="text-sm text-gray-600 hover:text-blue-600 transition-colors">
                                    "Send us a message"
                                </a>
                            </li>
                            <li>
                                <a href="#map" class="text-sm text-gray-600 hover:text-blue-600 transition-colors">
                                    "Visit the store"
                                </a>
                            </li>
                        </ul>
                    </div>

                    // Support
                    <div>
                        <h4 class="font-semibold text-gray-900 mb-4">"Support"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="mailto:support@quicklink.shop" class="text-sm text-gray-600 hover:text-blue-600 transition-colors">
                                    "support@quicklink.shop"
                                </a>
                            </li>
                            <li>
                                <a href="tel:+15551234567" class="text-sm text-gray-600 hover:text-blue-600 transition-colors">
                                    "+1 (555) 123-4567"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-gray-200/50 text-center">
                    <span class="text-sm text-gray-500">
                        "© 2025 QuickLink. All rights reserved."
                    </span>
                </div>
            </div>
        </footer>
    }
}
