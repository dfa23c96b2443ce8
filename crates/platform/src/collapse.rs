use bevy::prelude::*;
use bevy_rapier2d::prelude::ColliderDisabled;
use sd_common::components::platform::Platform;

/// Ticks pending fake-platform collapses and disables the collider when one
/// fires. A task whose generation no longer matches was scheduled before the
/// platform got recycled and must not touch it.
pub fn tick_collapse_timers(
    mut q_platforms: Query<(Entity, &mut Platform)>,
    time: Res<Time>,
    mut commands: Commands,
) {
    for (entity, mut platform) in q_platforms.iter_mut() {
        let mut task = match platform.collapse_timer.take() {
            Some(task) => task,
            None => continue,
        };

        task.timer.tick(time.delta());

        if !task.timer.just_finished() {
            platform.collapse_timer = Some(task);
            continue;
        }

        if platform.try_collapse(task.handle) {
            commands.entity(entity).insert(ColliderDisabled);
        } else {
            warn!("collapse task fired for a recycled platform, dropped");
        }
    }
}
