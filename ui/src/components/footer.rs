//! Site footer

use leptos::prelude::*;

const FOOTER_LINKS: [(&str, [&str; 4]); 3] = [
    ("Company", ["About Us", "Careers", "Press", "Blog"]),
    (
        "Services",
        ["License Valuation", "Bulk Sales", "Enterprise Solutions", "License Verification"],
    ),
    (
        "Legal",
        ["Terms of Service", "Privacy Policy", "Cookie Policy", "GDPR Compliance"],
    ),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="border-t border-gray-200 dark:border-slate-800 bg-gray-50 dark:bg-slate-950">
            <div class="max-w-7xl mx-auto px-4 py-12">
                <div class="grid gap-8 md:grid-cols-4">
                    <div class="space-y-4">
                        <div class="flex items-center gap-2">
                            <div class="w-8 h-8 rounded-md bg-teal-600 text-white font-bold flex items-center justify-center">"S"</div>
                            <span class="text-xl font-bold">"SoftSell"</span>
                        </div>
                        <p class="text-sm text-gray-500 dark:text-slate-400">
                            "The leading platform for software license resale, helping businesses recover value from unused assets."
                        </p>
                        <div class="flex gap-4 text-sm text-gray-500 dark:text-slate-400">
                            <a href="#" class="hover:text-gray-900 dark:hover:text-white">"Facebook"</a>
                            <a href="#" class="hover:text-gray-900 dark:hover:text-white">"Twitter"</a>
                            <a href="#" class="hover:text-gray-900 dark:hover:text-white">"LinkedIn"</a>
                        </div>
                    </div>
                    {FOOTER_LINKS
                        .into_iter()
                        .map(|(title, links)| view! {
                            <div>
                                <h3 class="font-semibold mb-4">{title}</h3>
                                <nav class="flex flex-col gap-2">
                                    {links
                                        .into_iter()
                                        .map(|link| view! {
                                            <a href="#" class="text-sm text-gray-500 dark:text-slate-400 hover:text-gray-900 dark:hover:text-white">
                                                {link}
                                            </a>
                                        })
                                        .collect::<Vec<_>>()}
                                </nav>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="mt-12 pt-8 border-t border-gray-200 dark:border-slate-800 flex flex-col md:flex-row justify-between gap-4 text-sm text-gray-500 dark:text-slate-400">
                    <p>{format!("© {} SoftSell Inc. All rights reserved.", year)}</p>
                    <p>"Designed with ❤️ in San Francisco"</p>
                </div>
            </div>
        </footer>
    }
}
