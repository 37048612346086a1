//! # Episode Loop
//!
//! Drives [`rl::CartPoleEnv`] with a [`Policy`] and logs how each episode
//! went. There is no rendering: the loop runs as fast as the solver allows.

use anyhow::{Context, Result};
use rl::{CartPoleConfig, CartPoleEnv, Env, Observation};

use crate::policy::Policy;
use crate::Args;

/// Outcome of a single episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeSummary {
    pub steps: u64,
    pub total_reward: f64,
    /// The cart left the track, as opposed to hitting the step limit.
    pub terminated: bool,
    pub final_state: Observation,
}

/// Run every requested episode and return their summaries.
///
/// # Errors
///
/// Fails if the config file cannot be loaded or the dynamics cannot be
/// solved during a step.
pub fn run(args: &Args) -> Result<Vec<EpisodeSummary>> {
    let config = match &args.config {
        Some(path) => CartPoleConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CartPoleConfig::default(),
    };

    let mut env = match args.seed {
        Some(seed) => CartPoleEnv::with_seed(config, seed)?,
        None => CartPoleEnv::new(config)?,
    };
    let mut rng = fastrand::Rng::with_seed(env.current_seed());

    tracing::info!(
        episodes = args.episodes,
        max_steps = args.max_steps,
        seed = env.current_seed(),
        policy = ?args.policy,
        "starting swing-up runs"
    );

    let mut summaries = Vec::with_capacity(args.episodes);
    for episode in 0..args.episodes {
        let summary = run_episode(&mut env, args.policy, args.max_steps, &mut rng)
            .with_context(|| format!("episode {episode}"))?;
        tracing::info!(
            episode,
            steps = summary.steps,
            total_reward = summary.total_reward,
            terminated = summary.terminated,
            x = summary.final_state.cart_position,
            theta = summary.final_state.pole_angle,
            "episode finished"
        );
        summaries.push(summary);
    }

    let mean_reward = if summaries.is_empty() {
        0.0
    } else {
        summaries.iter().map(|s| s.total_reward).sum::<f64>() / summaries.len() as f64
    };
    tracing::info!(mean_reward, "all episodes finished");
    Ok(summaries)
}

/// Reset, then step until the episode terminates or `max_steps` is reached.
///
/// # Errors
///
/// Propagates any step failure.
pub fn run_episode(
    env: &mut CartPoleEnv,
    policy: Policy,
    max_steps: u64,
    rng: &mut fastrand::Rng,
) -> Result<EpisodeSummary> {
    let mut state = env.reset();
    let mut total_reward = 0.0;
    let mut terminated = false;
    let mut steps = 0;

    while steps < max_steps {
        let action = policy.act(steps, env.action_space(), rng);
        let step = env.step(action)?;
        steps += 1;
        total_reward += step.reward;
        state = step.observation;
        if step.done {
            terminated = true;
            break;
        }
    }

    Ok(EpisodeSummary {
        steps,
        total_reward,
        terminated,
        final_state: state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(policy: Policy) -> Args {
        Args {
            episodes: 3,
            max_steps: 200,
            seed: Some(7),
            config: None,
            policy,
        }
    }

    #[test]
    fn constant_push_leaves_the_track() {
        let mut env = CartPoleEnv::with_seed(CartPoleConfig::default(), 1).unwrap();
        let mut rng = fastrand::Rng::with_seed(1);
        let summary = run_episode(&mut env, Policy::Right, 10_000, &mut rng).unwrap();
        assert!(summary.terminated);
        assert!(summary.final_state.cart_position > 100.0);
    }

    #[test]
    fn step_limit_cuts_episode_short() {
        let mut env = CartPoleEnv::with_seed(CartPoleConfig::default(), 2).unwrap();
        let mut rng = fastrand::Rng::with_seed(2);
        let summary = run_episode(&mut env, Policy::Alternate, 10, &mut rng).unwrap();
        assert_eq!(summary.steps, 10);
        assert!(!summary.terminated);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = run(&args(Policy::Random)).unwrap();
        let b = run(&args(Policy::Random)).unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let mut bad = args(Policy::Right);
        bad.config = Some("does/not/exist.json".into());
        let err = run(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("loading config"));
    }
}
