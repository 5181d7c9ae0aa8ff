//! Home/landing page

use leptos::prelude::*;

use crate::components::{scroll_to_section, ChatWidget, ContactForm, Footer, Header};

const TRUST_BADGES: [&str; 3] = ["Secure", "Fast Payments", "Verified Buyers"];

const SAMPLE_VALUES: [(&str, &str); 4] = [
    ("Adobe CC", "$345"),
    ("Microsoft 365", "$189"),
    ("AutoCAD", "$780"),
    ("Salesforce", "$420"),
];

const STEPS: [(&str, &str, &str); 3] = [
    (
        "⬆️",
        "Upload License",
        "Submit your license details through our secure portal. We support all major software vendors.",
    ),
    (
        "💲",
        "Get Valuation",
        "Receive a competitive market valuation within 24 hours based on current demand and license type.",
    ),
    (
        "💳",
        "Get Paid",
        "Accept our offer and receive payment via your preferred method within 3 business days.",
    ),
];

const ADVANTAGES: [(&str, &str, &str); 4] = [
    (
        "🔒",
        "Secure Transactions",
        "Bank-level encryption and secure transfer protocols protect your sensitive license information.",
    ),
    (
        "⚡",
        "Fast Turnaround",
        "From submission to payment in as little as 72 hours, the fastest in the industry.",
    ),
    (
        "📈",
        "Best Market Rates",
        "Our extensive buyer network ensures you receive up to 70% of the original license value.",
    ),
    (
        "🌍",
        "Global Reach",
        "Connect with buyers from over 120 countries, maximizing your chances of a quick sale.",
    ),
];

struct Testimonial {
    quote: &'static str,
    initials: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "SoftSell helped us recover over $45,000 from unused Adobe and Microsoft licenses after our company downsized. The process was incredibly smooth, and we received payment within 48 hours of accepting their offer.",
        initials: "JD",
        name: "Jennifer Davis",
        role: "CTO, TechNova Solutions",
    },
    Testimonial {
        quote: "As a growing startup, we needed to optimize our software budget. SoftSell not only helped us sell our excess licenses but also connected us with discounted options for the tools we actually needed. A win-win situation!",
        initials: "MR",
        name: "Marcus Rodriguez",
        role: "Operations Manager, Elevate Digital",
    },
];

const CONTACT_DETAILS: [(&str, &str, &str); 3] = [
    ("📞", "Phone", "+1 (888) 555-SOFT"),
    ("✉️", "Email", "contact@softsell.com"),
    ("📍", "Location", "123 Tech Plaza, San Francisco, CA 94105"),
];

const PRIMARY_BUTTON: &str = "inline-flex items-center justify-center gap-2 px-6 py-3 rounded-md font-medium \
                              bg-teal-600 text-white hover:bg-teal-700 transition-colors";
const OUTLINE_BUTTON: &str = "inline-flex items-center justify-center px-6 py-3 rounded-md font-medium border \
                              border-gray-300 dark:border-slate-700 hover:bg-gray-100 dark:hover:bg-slate-800 transition-colors";

#[component]
fn SectionHeading(tag: &'static str, title: &'static str, intro: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center text-center space-y-4 mb-12">
            <div class="inline-block rounded-lg bg-teal-100 dark:bg-teal-900/50 text-teal-700 dark:text-teal-300 px-3 py-1 text-sm">
                {tag}
            </div>
            <h2 class="text-3xl md:text-4xl font-bold tracking-tight">{title}</h2>
            <p class="max-w-2xl text-gray-500 dark:text-slate-400 md:text-lg">{intro}</p>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="py-16 md:py-24 bg-gradient-to-b from-teal-50 to-white dark:from-slate-900 dark:to-slate-950">
            <div class="max-w-7xl mx-auto px-4 grid gap-10 lg:grid-cols-2 items-center">
                <div class="space-y-6">
                    <h1 class="text-4xl md:text-6xl font-bold tracking-tight">
                        "Turn Unused Software Licenses Into Cash"
                    </h1>
                    <p class="text-lg text-gray-500 dark:text-slate-400 max-w-xl">
                        "SoftSell helps businesses recover value from unused software licenses with our secure, transparent, and efficient resale platform."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-3">
                        <button on:click=move |_| scroll_to_section("contact") class=PRIMARY_BUTTON>
                            "Sell My Licenses" <span>"→"</span>
                        </button>
                        <button on:click=move |_| scroll_to_section("contact") class=OUTLINE_BUTTON>
                            "Get a Quote"
                        </button>
                    </div>
                    <div class="flex flex-wrap gap-4 text-sm text-gray-500 dark:text-slate-400">
                        {TRUST_BADGES
                            .into_iter()
                            .map(|badge| view! {
                                <span class="flex items-center gap-1">
                                    <span class="text-teal-600">"✔"</span>
                                    {badge}
                                </span>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="rounded-xl border border-gray-200 dark:border-slate-800 bg-white dark:bg-slate-900 shadow-xl p-6 space-y-4">
                    <span class="inline-block rounded-full bg-teal-600 text-white text-xs font-medium px-3 py-1">
                        "Up to 70% Recovery"
                    </span>
                    <h3 class="text-xl font-bold">"Software License Marketplace"</h3>
                    <p class="text-sm text-gray-500 dark:text-slate-400">
                        "Connect with verified buyers looking for exactly what you're selling."
                    </p>
                    <div class="grid grid-cols-2 gap-3">
                        {SAMPLE_VALUES
                            .into_iter()
                            .map(|(product, price)| view! {
                                <div class="rounded-lg bg-gray-50 dark:bg-slate-800 p-3">
                                    <div class="text-sm font-medium">{product}</div>
                                    <div class="text-lg font-bold text-teal-600">{price}</div>
                                    <div class="text-xs text-gray-500 dark:text-slate-400">"avg. value"</div>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <button class=format!("{} w-full", OUTLINE_BUTTON)>"View All Software"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="py-16 md:py-24">
            <div class="max-w-7xl mx-auto px-4">
                <SectionHeading
                    tag="Simple Process"
                    title="How It Works"
                    intro="Our streamlined process makes selling your unused software licenses quick and profitable."
                />
                <div class="grid gap-8 md:grid-cols-3">
                    {STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (icon, title, body))| view! {
                            <div class="flex flex-col items-center text-center space-y-3 p-6">
                                <div class="relative w-16 h-16 rounded-full bg-teal-100 dark:bg-teal-900/50 text-2xl flex items-center justify-center">
                                    {icon}
                                    <span class="absolute -top-1 -right-1 w-6 h-6 rounded-full bg-teal-600 text-white text-xs font-bold flex items-center justify-center">
                                        {index + 1}
                                    </span>
                                </div>
                                <h3 class="text-xl font-bold">{title}</h3>
                                <p class="text-gray-500 dark:text-slate-400">{body}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn WhyChooseUs() -> impl IntoView {
    view! {
        <section id="why-choose-us" class="py-16 md:py-24 bg-gray-50 dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4">
                <SectionHeading
                    tag="Our Advantages"
                    title="Why Choose Us"
                    intro="SoftSell offers unique benefits that make us the preferred choice for software license resale."
                />
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                    {ADVANTAGES
                        .into_iter()
                        .map(|(icon, title, body)| view! {
                            <div class="rounded-xl border border-gray-200 dark:border-slate-800 bg-white dark:bg-slate-950 p-6 space-y-3">
                                <div class="text-3xl">{icon}</div>
                                <h3 class="text-lg font-bold">{title}</h3>
                                <p class="text-sm text-gray-500 dark:text-slate-400">{body}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-16 md:py-24">
            <div class="max-w-7xl mx-auto px-4">
                <SectionHeading
                    tag="Success Stories"
                    title="Customer Testimonials"
                    intro="Hear from businesses that have successfully recovered value from their unused software licenses."
                />
                <div class="grid gap-6 md:grid-cols-2">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! {
                            <div class="rounded-xl border border-gray-200 dark:border-slate-800 p-6 space-y-4">
                                <div class="text-yellow-400">"★★★★★"</div>
                                <p class="text-gray-600 dark:text-slate-300 italic">{format!("\"{}\"", t.quote)}</p>
                                <div class="flex items-center gap-3">
                                    <div class="w-10 h-10 rounded-full bg-teal-100 dark:bg-teal-900/50 text-teal-700 dark:text-teal-300 font-bold flex items-center justify-center">
                                        {t.initials}
                                    </div>
                                    <div>
                                        <h4 class="font-semibold">{t.name}</h4>
                                        <p class="text-sm text-gray-500 dark:text-slate-400">{t.role}</p>
                                    </div>
                                </div>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-16 md:py-24 bg-gray-50 dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 grid gap-10 lg:grid-cols-2">
                <div class="space-y-6">
                    <div class="inline-block rounded-lg bg-teal-100 dark:bg-teal-900/50 text-teal-700 dark:text-teal-300 px-3 py-1 text-sm">
                        "Get In Touch"
                    </div>
                    <h2 class="text-3xl md:text-4xl font-bold tracking-tight">
                        "Ready to Turn Unused Licenses Into Revenue?"
                    </h2>
                    <p class="text-gray-500 dark:text-slate-400 md:text-lg">
                        "Fill out the form and one of our license specialists will contact you within 24 hours to discuss your options."
                    </p>
                    <div class="space-y-4">
                        {CONTACT_DETAILS
                            .into_iter()
                            .map(|(icon, label, value)| view! {
                                <div class="flex items-center gap-4">
                                    <div class="w-10 h-10 rounded-full bg-teal-100 dark:bg-teal-900/50 flex items-center justify-center">
                                        {icon}
                                    </div>
                                    <div>
                                        <h3 class="font-medium">{label}</h3>
                                        <p class="text-gray-500 dark:text-slate-400">{value}</p>
                                    </div>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="rounded-xl border border-gray-200 dark:border-slate-800 bg-white dark:bg-slate-950 p-6 shadow-sm">
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="py-16 bg-teal-600 text-white">
            <div class="max-w-7xl mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="space-y-2">
                    <h2 class="text-3xl font-bold">"Start Recovering Value Today"</h2>
                    <p class="text-teal-50">
                        "Join thousands of businesses that have already recovered millions in software license value."
                    </p>
                </div>
                <div class="flex gap-3">
                    <button
                        on:click=move |_| scroll_to_section("contact")
                        class="px-6 py-3 rounded-md font-medium bg-white text-teal-700 hover:bg-teal-50 transition-colors"
                    >
                        "Get Started →"
                    </button>
                    <button
                        on:click=move |_| scroll_to_section("how-it-works")
                        class="px-6 py-3 rounded-md font-medium border border-white hover:bg-teal-700 transition-colors"
                    >
                        "Learn More"
                    </button>
                </div>
            </div>
        </section>
    }
}

/// Marketing landing page with the floating support chat
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Header />
            <main class="flex-1">
                <Hero />
                <HowItWorks />
                <WhyChooseUs />
                <Testimonials />
                <ContactSection />
                <CallToAction />
                <ChatWidget />
            </main>
            <Footer />
        </div>
    }
}
