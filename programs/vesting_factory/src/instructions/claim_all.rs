use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::constants::FACTORY_SEED;
use crate::state::Factory;

// NOTE: `claim_all` handler logic lives in `src/lib.rs` to avoid Anchor
// `Context` lifetime invariance issues when delegating across modules.
//
// Remaining accounts, per schedule in creation order starting at `first_index`:
// `[schedule (mut), schedule_vault (mut), recipient_token_account (mut)]`.

#[derive(Accounts)]
pub struct ClaimAll<'info> {
    #[account(seeds = [FACTORY_SEED, factory.mint.as_ref()], bump = factory.bump)]
    pub factory: Account<'info, Factory>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ClaimAllProcessed {
    pub factory: Pubkey,
    pub first_index: u64,
    pub visited: u8,
    pub claimed_count: u8,
    pub claimed_total: u64,
}
