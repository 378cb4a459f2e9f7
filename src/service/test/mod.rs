mod ledger;
mod player;
