use rosary_core::model::Section;
use rosary_core::progress::{Edge, Step};
use rosary_core::time::fixed_now;
use services::{AppServices, Clock};

async fn open(db: &str, state: &std::path::Path) -> AppServices {
    AppServices::new_sqlite(db, state, Clock::fixed(fixed_now()))
        .await
        .expect("open services")
}

#[tokio::test]
async fn progress_and_session_survive_restart() {
    let state = tempfile::tempdir().expect("tempdir");
    let db = "sqlite:file:memdb_progress_restart?mode=memory&cache=shared";

    let first = open(db, state.path()).await;
    let progress = first.progress();
    progress.select(Section::Gaudiosa);
    for _ in 0..5 {
        progress.next().expect("advance");
    }
    let snapshot = progress.snapshot();
    let gaudiosa = snapshot.section(Section::Gaudiosa).expect("mystery");
    assert_eq!((gaudiosa.count, gaudiosa.sub_index, gaudiosa.position), (5, 4, 5));

    // a sixth advance crosses into the next section instead of counting
    assert_eq!(
        progress.next().expect("cross"),
        Step::Crossed {
            from: Section::Gaudiosa,
            to: Section::Dolorosa
        }
    );

    let user = first.auth().register("pio", "pietrelcina").await.expect("register");
    first.session().remember(&user).expect("remember");
    drop(first);

    let second = open(db, state.path()).await;
    assert_eq!(second.session().restore().expect("restore"), Some(user));
    let restored = second.progress().snapshot();
    assert_eq!(restored.current, Section::Initium);
    assert_eq!(restored.progress.count(Section::Gaudiosa), 5);
    assert_eq!(restored.progress.count(Section::Dolorosa), 0);
}

#[tokio::test]
async fn navigation_stops_at_both_ends() {
    let services = AppServices::in_memory(Clock::fixed(fixed_now()));
    let progress = services.progress();
    assert_eq!(progress.previous().expect("previous"), Step::Boundary(Edge::Start));

    progress.select(Section::Ultima);
    assert_eq!(progress.next().expect("next"), Step::Boundary(Edge::End));
    assert_eq!(progress.snapshot().current, Section::Ultima);
}
