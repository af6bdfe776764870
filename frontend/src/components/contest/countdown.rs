use gloo_timers::callback::Interval;
use shared::format_countdown;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    /// Remaining seconds, as the backend computed them when the view
    /// model was built
    pub seconds: u64,
    #[prop_or_default]
    pub class: Classes,
}

/// Ticking countdown. Starts from the backend-supplied seed and counts
/// down locally once a second, flooring at zero; the seed itself is never
/// recomputed on the client.
#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let remaining = use_state(|| props.seconds);

    {
        let remaining = remaining.clone();
        use_effect_with(props.seconds, move |seconds| {
            // The handle inside the interval closure goes stale, so the
            // authoritative counter lives in a cell.
            let left = Rc::new(Cell::new(*seconds));
            remaining.set(left.get());

            let interval = {
                let left = left.clone();
                let remaining = remaining.clone();
                Interval::new(1_000, move || {
                    if left.get() > 0 {
                        left.set(left.get() - 1);
                        remaining.set(left.get());
                    }
                })
            };

            move || drop(interval)
        });
    }

    html! {
        <span class={classes!("font-mono", "tabular-nums", props.class.clone())}>
            {format_countdown(*remaining)}
        </span>
    }
}
