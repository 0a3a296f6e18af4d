use gatherly_domain::event::{EventDetails, SimilarEvent};
use maud::{DOCTYPE, Markup, html};

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body { (content) }
        }
    }
}

fn event_detail_item(icon: &str, alt: &str, label: &str) -> Markup {
    html! {
        section class="flex-row-gap-2 items-center" {
            img src=(icon) alt=(alt) width="17" height="17";
            p { (label) }
        }
    }
}

fn event_agenda(agenda_items: &[String]) -> Markup {
    html! {
        section class="agenda" {
            h2 { "Agenda" }
            ul {
                @for item in agenda_items {
                    li { (item) }
                }
            }
        }
    }
}

fn event_tags(tags: &[String]) -> Markup {
    html! {
        section class="flex flex-row gap-1.5 flex-wrap" {
            @for tag in tags {
                div class="pill" { (tag) }
            }
        }
    }
}

/// The booking submission control is an external collaborator; this side
/// only renders its markup.
fn book_event_widget() -> Markup {
    html! {
        form class="book-event" method="post" action="/api/bookings" {
            input type="email" name="email" placeholder="Enter your email" required;
            button type="submit" { "Book Now" }
        }
    }
}

fn booking_panel(bookings: u64) -> Markup {
    html! {
        section class="signup-card" {
            h2 { "Book Your Spot" }
            @if bookings > 0 {
                p class="text-sm" {
                    "Join " (bookings) " people who have already booked their spot!"
                }
            } @else {
                p class="text-sm" { "Be the first to book your spot!" }
            }
            (book_event_widget())
        }
    }
}

fn similar_event_card(similar: &SimilarEvent) -> Markup {
    html! {
        a class="event-card" id=(format!("event-{}", similar.id))
            href=(format!("/events/{}", similar.event.slug)) {
            img src=(similar.event.image) alt=(similar.event.title);
            h3 { (similar.event.title) }
            p { (similar.event.date) " " (similar.event.location) }
        }
    }
}

pub fn event_details_page(details: &EventDetails) -> Markup {
    let event = &details.event;

    layout(
        &event.title,
        html! {
            section id="event" {
                div class="header" {
                    h1 { (event.title) }
                    p { (event.description.as_deref().unwrap_or_default()) }
                }
                div class="details" {
                    aside class="content" {
                        img src=(event.image) alt="Event banner" width="800" height="800" class="banner";
                        section class="flex-col-gap-2" {
                            h2 { "Overview" }
                            p { (event.overview) }
                        }
                        section class="flex-col-gap-2" {
                            h2 { "Event Details" }
                            (event_detail_item("/icons/calendar.svg", "calendar", &event.date))
                            (event_detail_item("/icons/clock.svg", "clock", &event.time))
                            (event_detail_item("/icons/pin.svg", "pin", &event.location))
                            (event_detail_item("/icons/mode.svg", "mode", &event.mode))
                            (event_detail_item("/icons/audience.svg", "audience", &event.audience))
                        }
                        (event_agenda(&event.agenda))
                        section class="flex-col-gap-2" {
                            h2 { "About the Organizer" }
                            p { (event.organizer) }
                        }
                        (event_tags(&event.tags))
                    }
                    aside class="booking" {
                        (booking_panel(details.bookings))
                    }
                }
                div class="flex w-full flex-col gap-4 pt-20" {
                    h2 { "Similar Events" }
                    div class="events" {
                        @for similar in &details.similar_events {
                            (similar_event_card(similar))
                        }
                    }
                }
            }
        },
    )
}

pub fn explore_button() -> Markup {
    html! {
        button type="button" id="explore-btn" class="mt-7 mx-auto" {
            a href="/explore" {
                "Explore Events"
                img src="/icons/arrow-down.svg" alt="arrow-down" width="24" height="24";
            }
        }
    }
}

pub fn home_page() -> Markup {
    layout(
        "Gatherly",
        html! {
            section class="hero" {
                h1 { "Find your next event" }
                p { "Talks, meetups and workshops, all in one place." }
                (explore_button())
            }
            section id="events" {
                h2 { "Upcoming Events" }
            }
        },
    )
}

pub fn not_found_page() -> Markup {
    layout(
        "Event not found",
        html! {
            section class="not-found" {
                h1 { "Event not found" }
                p { "The event you are looking for does not exist or is no longer listed." }
                a href="/" { "Back to all events" }
            }
        },
    )
}

pub fn server_error_page() -> Markup {
    layout(
        "Something went wrong",
        html! {
            section class="server-error" {
                h1 { "Something went wrong" }
                p { "We could not load this page. Please try again later." }
            }
        },
    )
}
