use bevy::{
    audio::{PlaybackMode, VolumeLevel},
    prelude::*,
};

/// Sound effect an entity plays on contact. `None` degrades to silence, not
/// every platform kind ships a clip.
#[derive(Component, Debug, Default)]
pub struct ContactSound(pub Option<Handle<AudioSource>>);

pub fn play_effect(commands: &mut Commands, sound: &ContactSound) {
    let source = match &sound.0 {
        Some(source) => source.clone(),
        None => return,
    };

    commands.spawn(AudioBundle {
        source,
        settings: PlaybackSettings {
            volume: bevy::audio::Volume::Relative(VolumeLevel::new(0.2)),
            mode: PlaybackMode::Remove,
            ..default()
        },
    });
}
