use anyhow::Result;
use portal_client::Client;
use recommender::{Presenter, Tab};

use crate::render;

pub async fn recommend(client: Client, tab: Tab) -> Result<()> {
    let mut presenter = Presenter::new(client);
    presenter.select_tab(tab);
    println!("{}", render::recommendations(&presenter.view()));

    let liveness = presenter.liveness();
    tokio::select! {
        _ = presenter.mount() => {}
        _ = tokio::signal::ctrl_c() => {
            liveness.unmount();
            log::info!("interrupted while loading recommendations");
            return Ok(());
        }
    }
    println!("{}", render::recommendations(&presenter.view()));
    Ok(())
}
