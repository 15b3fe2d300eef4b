mod power;
